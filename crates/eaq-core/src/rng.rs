//! Random draws behind an injectable source.
//!
//! Every random branch in the forest is a fair coin between two named
//! outcomes, so a source only has to flip coins.

use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of fair, independent two-way draws.
pub trait RandomSource {
    /// Flip a fair coin.
    fn flip(&mut self) -> bool;

    /// Pick `first` on heads, `second` on tails.
    fn draw<T>(&mut self, first: T, second: T) -> T
    where
        Self: Sized,
    {
        if self.flip() { first } else { second }
    }
}

/// Unseeded draws from the thread-local RNG.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    /// Create a source backed by the thread RNG.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomSource for ThreadRandom {
    fn flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Reproducible draws from a seeded RNG.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Draws taken from a predetermined script.
///
/// Once the script runs out every flip comes up heads.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    flips: VecDeque<bool>,
}

impl ScriptedRandom {
    /// Create a source that returns `flips` in order.
    pub fn new(flips: impl IntoIterator<Item = bool>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
        }
    }

    /// Flips not consumed yet.
    pub fn remaining(&self) -> usize {
        self.flips.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or_else(|| {
            log::warn!("scripted random source exhausted, defaulting to heads");
            true
        })
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_in_order_then_heads() {
        let mut rng = ScriptedRandom::new([false, true]);
        assert!(!rng.flip());
        assert_eq!(rng.remaining(), 1);
        assert!(rng.flip());
        assert!(rng.flip());
    }

    #[test]
    fn draw_picks_by_flip() {
        let mut rng = ScriptedRandom::new([true, false]);
        assert_eq!(rng.draw("win", "lose"), "win");
        assert_eq!(rng.draw("win", "lose"), "lose");
    }

    #[test]
    fn boxed_source_delegates() {
        let mut rng: Box<dyn RandomSource> = Box::new(ScriptedRandom::new([false]));
        assert!(!rng.flip());
        assert_eq!(rng.draw(1, 2), 1);
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let xs: Vec<bool> = (0..64).map(|_| a.flip()).collect();
        let ys: Vec<bool> = (0..64).map(|_| b.flip()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn both_sides_reachable() {
        let mut rng = SeededRandom::new(0);
        let heads = (0..1000).filter(|_| rng.flip()).count();
        assert!(heads > 0 && heads < 1000, "heads: {heads}");
    }

    #[test]
    fn thread_random_flips() {
        let mut rng = ThreadRandom::new();
        let heads = (0..1000).filter(|_| rng.flip()).count();
        assert!(heads > 0 && heads < 1000);
    }
}
