//! Flavor text for blows.
//!
//! Lines may use `{actor}` for the villain's name and `{weapon}` for the
//! weapon being swung.

use crate::dice::Roller;

use super::table::Outcome::{self, *};

type Lines = &'static [&'static str];

fn hero_lines(outcome: Outcome) -> Lines {
    match outcome {
        Missed => &[
            "Your swing misses the {actor} by an inch.",
            "A good slash, but it misses the {actor} by a mile.",
            "You charge, but the {actor} jumps nimbly aside.",
        ],
        Stagger => &[
            "The {actor} is staggered, and drops to his knees.",
            "The {actor} is momentarily disoriented and can't fight back.",
        ],
        LightWound => &[
            "A good stroke! The {actor} is wounded.",
            "The {actor} is struck on the arm; blood begins to trickle down.",
        ],
        SeriousWound => &[
            "The {actor} receives a deep gash in his side.",
            "A savage blow on the thigh! The {actor} is stunned but can still fight.",
        ],
        Unconscious => &[
            "The {actor} is battered into unconsciousness.",
            "Your {weapon} crashes down, knocking the {actor} into dreamland.",
        ],
        Killed => &[
            "The fatal blow strikes the {actor} square in the heart: he dies.",
            "The {actor} takes a fatal blow and slumps to the floor dead.",
        ],
        LoseWeapon => &[
            "The {actor}'s weapon is knocked to the floor, leaving him unarmed.",
            "The {actor} is disarmed by a subtle feint past his guard.",
        ],
    }
}

fn troll_lines(outcome: Outcome) -> Lines {
    match outcome {
        Missed => &[
            "The troll swings his {weapon}, but it misses.",
            "The {weapon} sweeps past as you jump aside.",
        ],
        Stagger => &["The troll hits you with a glancing blow, and you are momentarily stunned."],
        LightWound => &[
            "The {weapon} clips your forearm.",
            "The flat of the troll's {weapon} skins across your forearm.",
        ],
        SeriousWound => &["The troll's {weapon} gets you right in the side. Ouch!"],
        Unconscious => &["The flat of the troll's {weapon} hits you and you are knocked out."],
        Killed => &["The troll's {weapon} crashes down on your skull. It's all over."],
        LoseWeapon => &["The troll's swing knocks your weapon out of your hands."],
    }
}

fn thief_lines(outcome: Outcome) -> Lines {
    match outcome {
        Missed => &[
            "The thief stabs nonchalantly with his {weapon} and misses.",
            "You dodge as the thief comes in low.",
        ],
        Stagger => &["The thief slams into you, and you stagger back."],
        LightWound => &["The thief draws blood, raking his {weapon} across your arm."],
        SeriousWound => &["The thief neatly slices you open with his {weapon}."],
        Unconscious => &["The butt of the thief's {weapon} knocks you out."],
        Killed => &["Finishing you off, the thief inserts his {weapon} into your heart."],
        LoseWeapon => &[
            "The thief neatly flips your weapon out of your hands, and it drops to the floor.",
        ],
    }
}

fn cyclops_lines(outcome: Outcome) -> Lines {
    match outcome {
        Missed => &["The cyclops misses, but the backwash almost knocks you over."],
        Stagger => &["The cyclops sends you crashing into a wall."],
        LightWound => &["The cyclops bruises you with a glancing punch."],
        SeriousWound => &["The cyclops breaks your ribs with a hammering punch."],
        Unconscious => &["The cyclops knocks you senseless."],
        Killed => &["The cyclops crushes you to death."],
        LoseWeapon => &["The cyclops grabs your weapon and throws it across the room."],
    }
}

fn generic_lines(outcome: Outcome) -> Lines {
    match outcome {
        Missed => &["The {actor} misses."],
        Stagger => &["The {actor} knocks you back a step."],
        LightWound => &["The {actor} wounds you."],
        SeriousWound => &["The {actor} wounds you badly."],
        Unconscious => &["The {actor} knocks you out."],
        Killed => &["The {actor} kills you."],
        LoseWeapon => &["The {actor} knocks your weapon away."],
    }
}

fn villain_lines(villain: &str, outcome: Outcome) -> Lines {
    match villain {
        "troll" => troll_lines(outcome),
        "thief" => thief_lines(outcome),
        "cyclops" => cyclops_lines(outcome),
        _ => generic_lines(outcome),
    }
}

/// Substitute `{actor}` and `{weapon}`.
pub fn render(line: &str, actor: &str, weapon: &str) -> String {
    line.replace("{actor}", actor).replace("{weapon}", weapon)
}

/// A line for the hero's blow against `actor`.
pub fn hero_message<R: Roller>(
    outcome: Outcome,
    actor: &str,
    weapon: &str,
    roller: &mut R,
) -> String {
    let line = roller.pick(hero_lines(outcome)).copied().unwrap_or("");
    render(line, actor, weapon)
}

/// A line for a villain's blow against the hero.
///
/// `villain` is the actor id; unknown villains get generic lines.
pub fn villain_message<R: Roller>(
    villain: &str,
    outcome: Outcome,
    actor: &str,
    weapon: &str,
    roller: &mut R,
) -> String {
    let line = roller
        .pick(villain_lines(villain, outcome))
        .copied()
        .unwrap_or("");
    render(line, actor, weapon)
}

/// Shown instead of a blow when a staggered villain recovers.
pub fn recovery_message(actor: &str) -> String {
    format!("The {actor} slowly regains his feet.")
}
