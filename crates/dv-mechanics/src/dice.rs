//! Injectable randomness.

/// A source of uniform draws.
///
/// Every `rand::Rng` is a `Roller`; tests can script exact draws with
/// [`Scripted`].
pub trait Roller {
    /// A uniform value in `0..sides`. Returns 0 when `sides` is 0.
    fn roll(&mut self, sides: usize) -> usize;

    /// Pick one entry uniformly.
    fn pick<'a, T>(&mut self, choices: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if choices.is_empty() {
            None
        } else {
            choices.get(self.roll(choices.len()))
        }
    }
}

impl<R: rand::Rng + ?Sized> Roller for R {
    fn roll(&mut self, sides: usize) -> usize {
        if sides == 0 {
            0
        } else {
            self.random_range(0..sides)
        }
    }
}

/// Replays a fixed sequence of draws, wrapping around at the end.
///
/// Each value is reduced modulo the requested number of sides.
#[derive(Debug, Clone)]
pub struct Scripted {
    draws: Vec<usize>,
    next: usize,
}

impl Scripted {
    /// A roller that returns `draws` in order.
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
        }
    }

    /// How many draws have been taken.
    pub fn taken(&self) -> usize {
        self.next
    }
}

impl Roller for Scripted {
    fn roll(&mut self, sides: usize) -> usize {
        if sides == 0 || self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value % sides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rng_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(rng.roll(9) < 9);
        }
        assert_eq!(rng.roll(0), 0);
    }

    #[test]
    fn seeded_rolls_repeat() {
        let a: Vec<usize> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..20).map(|_| rng.roll(9)).collect()
        };
        let b: Vec<usize> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..20).map(|_| rng.roll(9)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn scripted_replays_and_wraps() {
        let mut dice = Scripted::new([3, 12]);
        assert_eq!(dice.roll(9), 3);
        assert_eq!(dice.roll(9), 3);
        assert_eq!(dice.roll(4), 3);
        assert_eq!(dice.taken(), 3);
    }

    #[test]
    fn pick_uses_roll() {
        let mut dice = Scripted::new([1]);
        assert_eq!(dice.pick(&["a", "b", "c"]), Some(&"b"));
        assert_eq!(dice.pick::<&str>(&[]), None);
    }
}
