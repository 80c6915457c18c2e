//! Outcome tables.
//!
//! Each table is nine equally likely slots. The table is chosen from the
//! attack and defense strengths alone; the slot is chosen by a d9.

use std::fmt;

use serde::{Deserialize, Serialize};

use Outcome::*;

/// Number of slots in every table.
pub const SLOTS: usize = 9;

/// The result of one blow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No effect.
    Missed,
    /// The defender is knocked off balance.
    Stagger,
    /// One point of damage.
    LightWound,
    /// Two points of damage.
    SeriousWound,
    /// Out of the fight. Treated as death.
    Unconscious,
    /// Dead.
    Killed,
    /// The defender's weapon is knocked away.
    LoseWeapon,
}

impl Outcome {
    /// Whether the outcome ends the defender's life.
    pub fn is_lethal(self) -> bool {
        matches!(self, Unconscious | Killed)
    }

    /// Strength or wound points removed.
    pub fn damage(self) -> i32 {
        match self {
            LightWound => 1,
            SeriousWound => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Missed => "missed",
            Stagger => "stagger",
            LightWound => "light wound",
            SeriousWound => "serious wound",
            Unconscious => "unconscious",
            Killed => "killed",
            LoseWeapon => "lose weapon",
        };
        f.write_str(name)
    }
}

/// Which outcome table an exchange uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableId {
    /// Defense 1.
    A,
    /// Defense 2, attack at most 2.
    B1,
    /// Defense 2, attack above 2.
    B2,
    /// Defense 3 or more, defender well ahead.
    C1,
    /// Defense 3 or more, evenly matched.
    C2,
    /// Defense 3 or more, attacker ahead.
    C3,
}

const TABLE_A: [Outcome; SLOTS] = [
    Missed, Stagger, Stagger, Unconscious, Unconscious, Killed, Killed, Killed, Killed,
];
const TABLE_B1: [Outcome; SLOTS] = [
    Missed, Missed, Stagger, Stagger, LightWound, LightWound, Unconscious, Killed, Killed,
];
const TABLE_B2: [Outcome; SLOTS] = [
    Missed, Stagger, LightWound, LightWound, SeriousWound, Unconscious, Killed, Killed, Killed,
];
const TABLE_C1: [Outcome; SLOTS] = [
    Missed, Missed, Missed, Missed, Missed, Stagger, Stagger, LightWound, SeriousWound,
];
const TABLE_C2: [Outcome; SLOTS] = [
    Missed, Missed, Missed, Stagger, Stagger, LightWound, LightWound, SeriousWound, Unconscious,
];
const TABLE_C3: [Outcome; SLOTS] = [
    Missed, Stagger, Stagger, LightWound, LightWound, SeriousWound, SeriousWound, Unconscious,
    Killed,
];

impl TableId {
    /// The nine slots of this table.
    pub fn outcomes(self) -> &'static [Outcome; SLOTS] {
        match self {
            Self::A => &TABLE_A,
            Self::B1 => &TABLE_B1,
            Self::B2 => &TABLE_B2,
            Self::C1 => &TABLE_C1,
            Self::C2 => &TABLE_C2,
            Self::C3 => &TABLE_C3,
        }
    }

    /// The outcome in `slot`, wrapping out-of-range slots.
    pub fn outcome(self, slot: usize) -> Outcome {
        self.outcomes()[slot % SLOTS]
    }
}

/// Choose the table for an attack against a defense.
pub fn select_table(attack: i32, defense: i32) -> TableId {
    if defense <= 1 {
        TableId::A
    } else if defense == 2 {
        if attack <= 2 { TableId::B1 } else { TableId::B2 }
    } else {
        let margin = attack - defense;
        if margin <= -2 {
            TableId::C1
        } else if margin >= 1 {
            TableId::C3
        } else {
            TableId::C2
        }
    }
}
