use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::{EntropyError, EntropySource};

/// Deterministic source seeded from a `u64`.
///
/// The same seed always yields the same draw sequence, so generated
/// passwords can be asserted exactly. Not for production secrets.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl EntropySource for SeededSource {
    fn next_u64(&mut self) -> Result<u64, EntropyError> {
        Ok(self.rng.next_u64())
    }

    fn draw(&mut self, n: usize) -> Result<usize, EntropyError> {
        Ok(self.rng.random_range(0..n))
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}
