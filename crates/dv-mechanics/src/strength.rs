//! Fighting strength of the hero and of villains.

use dv_core::{Actor, ItemId};

/// Strength of a hero with no score.
pub const STRENGTH_MIN: i32 = 2;
/// Strength of a hero with a perfect score.
pub const STRENGTH_MAX: i32 = 7;
/// Effective strength of a distracted villain.
pub const DISTRACTED_CAP: i32 = 2;

/// The hero's fighting strength.
///
/// Grows one point per fixed step of score from [`STRENGTH_MIN`] up to
/// [`STRENGTH_MAX`], then the (non-positive) wound penalty is added. Never
/// below 1.
pub fn hero_strength(score: i32, max_score: i32, wounds: i32) -> i32 {
    let step = (max_score / (STRENGTH_MAX - STRENGTH_MIN)).max(1);
    let base = (STRENGTH_MIN + score.max(0) / step).min(STRENGTH_MAX);
    (base + wounds.min(0)).max(1)
}

/// A villain's effective strength against the hero.
///
/// `hero_carries` reports whether the hero has a given item.
pub fn villain_strength(actor: &Actor, hero_carries: impl Fn(&ItemId) -> bool) -> i32 {
    let mut strength = actor.strength;
    if actor.distracted {
        strength = strength.min(DISTRACTED_CAP);
    }
    if let Some(weakness) = &actor.weakness
        && hero_carries(&weakness.weapon)
    {
        strength -= weakness.amount;
    }
    strength.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fresh_hero_has_minimum_strength() {
        assert_eq!(hero_strength(0, 100, 0), STRENGTH_MIN);
    }

    #[test]
    fn perfect_score_reaches_maximum() {
        assert_eq!(hero_strength(100, 100, 0), STRENGTH_MAX);
        assert_eq!(hero_strength(1_000, 100, 0), STRENGTH_MAX);
    }

    #[test]
    fn strength_steps_with_score() {
        assert_eq!(hero_strength(19, 100, 0), 2);
        assert_eq!(hero_strength(20, 100, 0), 3);
        assert_eq!(hero_strength(60, 100, 0), 5);
    }

    #[test]
    fn wounds_never_drop_below_one() {
        assert_eq!(hero_strength(0, 100, -1), 1);
        assert_eq!(hero_strength(0, 100, -10), 1);
    }

    #[test]
    fn tiny_max_score_does_not_divide_by_zero() {
        assert_eq!(hero_strength(3, 0, 0), 5);
        assert_eq!(hero_strength(30, 0, 0), STRENGTH_MAX);
    }

    #[test]
    fn weakness_and_distraction() {
        let troll = Actor::new("troll", "troll", "", "troll-room")
            .fighter(4)
            .weak_to("sword", 1);
        assert_eq!(villain_strength(&troll, |_| false), 4);
        assert_eq!(villain_strength(&troll, |w| w.as_str() == "sword"), 3);

        let mut distracted = troll.clone();
        distracted.distracted = true;
        assert_eq!(villain_strength(&distracted, |_| false), 2);
        assert_eq!(villain_strength(&distracted, |_| true), 1);
    }

    #[test]
    fn villain_floor_is_one() {
        let weakling = Actor::new("rat", "rat", "", "cellar")
            .fighter(1)
            .weak_to("cheese", 5);
        assert_eq!(villain_strength(&weakling, |_| true), 1);
    }

    proptest! {
        #[test]
        fn monotonic_in_score(a in 0i32..500, b in 0i32..500, max in 1i32..500) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(hero_strength(lo, max, 0) <= hero_strength(hi, max, 0));
        }

        #[test]
        fn bounded(score in -100i32..1_000, max in 0i32..1_000, wounds in -20i32..=0) {
            let s = hero_strength(score, max, wounds);
            prop_assert!((1..=STRENGTH_MAX).contains(&s));
            prop_assert!(hero_strength(score, max, 0) >= STRENGTH_MIN);
        }

        #[test]
        fn wounds_subtract_exactly(score in 0i32..200, wounds in -5i32..=0) {
            let healthy = hero_strength(score, 100, 0);
            let hurt = hero_strength(score, 100, wounds);
            prop_assert_eq!(hurt, (healthy + wounds).max(1));
        }
    }
}
