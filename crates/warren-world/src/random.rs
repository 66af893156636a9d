//! Injected randomness.
//!
//! Nothing in the simulation reaches for a global generator. Every draw goes
//! through a [`RandomSource`] passed in by the caller, so a run is fully
//! determined by its seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random numbers.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. Returns 0 when `bound` is 0.
    fn next_int(&mut self, bound: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f64;

    /// Fair coin flip.
    fn next_bool(&mut self) -> bool {
        self.next_float() < 0.5
    }
}

/// Seeded, resettable random source backed by [`SmallRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: SmallRng,
}

impl SeededRandom {
    /// Create a source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The seed this source was created with.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewind to the start of the sequence for the original seed.
    pub fn reset(&mut self) {
        self.rng = SmallRng::seed_from_u64(self.seed);
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }

    fn next_float(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Fisher-Yates shuffle driven by a [`RandomSource`].
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let bound = u32::try_from(i.saturating_add(1)).unwrap_or(u32::MAX);
        let j = usize::try_from(rng.next_int(bound)).unwrap_or(i);
        items.swap(i, j.min(i));
    }
}
