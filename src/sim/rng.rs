//! Injected random source
//!
//! The simulation never reaches for a global RNG. Callers hand in anything
//! that can draw inclusive integer ranges; runs are reproducible by seeding.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer draws, inclusive on both ends
pub trait RandomSource {
    fn range(&mut self, min: i32, max: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.random_range(min..=max)
    }
}

/// Seeded generator used by sessions and tests
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
