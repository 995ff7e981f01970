//! Password generation and output.

pub mod charset;
mod error;
mod generate;
pub mod output;
mod request;
pub mod strength;

pub use charset::CharacterClass;
pub use error::GenerateError;
pub use generate::{generate, validate};
pub use request::GenerationRequest;
