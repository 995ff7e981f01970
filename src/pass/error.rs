use thiserror::Error;

use crate::entropy::EntropyError;

/// Why a password could not be generated.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Requested length is not a positive integer
    #[error("Password length must be greater than 0.")]
    InvalidLength,

    /// Every character class was switched off
    #[error("At least one character type must be selected.")]
    NoClassSelected,

    /// The randomness source failed mid-generation
    #[error("Entropy source failure: {0}")]
    EntropySource(#[from] EntropyError),
}

impl GenerateError {
    /// Caller-correctable input problems, as opposed to internal failures.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            GenerateError::InvalidLength | GenerateError::NoClassSelected
        )
    }
}
