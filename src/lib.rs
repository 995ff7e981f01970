//! Constrained random password generation.
//!
//! [`generate`] turns a [`GenerationRequest`] into a password that contains
//! at least one character of every selected class (length permitting),
//! drawing all randomness from an injected [`EntropySource`].
//!
//! ```
//! use passgen::{GenerationRequest, SeededSource, generate};
//!
//! let request = GenerationRequest::all(16);
//! let password = generate(&request, &mut SeededSource::new(1)).unwrap();
//! assert_eq!(password.len(), 16);
//! ```

pub mod entropy;
pub mod pass;
pub mod settings;

pub use entropy::{EntropyError, EntropySource, OsSource, SeededSource, UrandomSource};
pub use pass::{CharacterClass, GenerateError, GenerationRequest, generate};
pub use settings::Settings;
