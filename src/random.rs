//! Randomness as an injected capability.

use rand::Rng;

/// Source of the random choices made during placement and targeting.
pub trait RandomSource {
    /// Uniform integer in `min..=max`.
    fn next_int(&mut self, min: usize, max: usize) -> usize;

    /// Fair coin flip.
    fn next_bool(&mut self) -> bool;
}

impl<R: Rng> RandomSource for R {
    fn next_int(&mut self, min: usize, max: usize) -> usize {
        self.random_range(min..=max)
    }

    fn next_bool(&mut self) -> bool {
        self.random()
    }
}
