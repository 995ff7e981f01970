use rand::TryRngCore;
use rand::rngs::OsRng;

use super::{EntropyError, EntropySource};

/// Operating system CSPRNG (getrandom / BCryptGenRandom / SecRandomCopyBytes).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource;

impl OsSource {
    pub fn new() -> Self {
        OsSource
    }
}

impl EntropySource for OsSource {
    #[inline]
    fn next_u64(&mut self) -> Result<u64, EntropyError> {
        OsRng
            .try_next_u64()
            .map_err(|e| EntropyError::Os(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "os"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_range() {
        let mut src = OsSource::new();
        for n in [2, 10, 26, 88] {
            for _ in 0..200 {
                assert!(src.draw(n).unwrap() < n);
            }
        }
    }
}
