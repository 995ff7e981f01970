//! Randomness sources for password generation.
//!
//! The generator never reaches for ambient randomness. Callers hand it an
//! [`EntropySource`], which makes the OS source the production default and a
//! seeded source available for reproducible output.

mod os;
mod seeded;
mod urand;

pub use os::OsSource;
pub use seeded::SeededSource;
pub use urand::UrandomSource;

use thiserror::Error;

/// A randomness source could not produce a value.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The operating system generator reported a failure
    #[error("OS random source failed: {0}")]
    Os(String),

    /// Reading a device or file backed source failed
    #[error("entropy read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability to draw uniformly distributed integers.
pub trait EntropySource {
    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> Result<u64, EntropyError>;

    /// Uniform value in `[0, n)`.
    ///
    /// `n` must be non-zero. The default rejects raw values from the
    /// incomplete top bucket so every residue is equally likely.
    fn draw(&mut self, n: usize) -> Result<usize, EntropyError> {
        debug_assert!(n > 0, "draw bound must be non-zero");
        if n <= 1 {
            return Ok(0);
        }

        let n = n as u64;
        let zone = u64::MAX - u64::MAX % n;
        loop {
            let v = self.next_u64()?;
            if v < zone {
                return Ok((v % n) as usize);
            }
        }
    }

    /// Short human readable name, used in logs and summaries.
    fn name(&self) -> &'static str;
}
