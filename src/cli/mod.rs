//! Command line front end.
//!
//! Owns everything around the generator: flag parsing, the length policy,
//! output routing and mapping errors to exit statuses (2 for bad input,
//! 1 for internal failures).

mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;

use thiserror::Error;
use tracing::error;

use passgen::pass::GenerateError;
use passgen::pass::output::OutputError;

pub use context::Context;
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::{ParseError, parse};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Password length must not exceed {max}.")]
    LengthAboveMax { max: usize },

    #[error("failed to write passwords: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to save settings: {0}")]
    Settings(#[source] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl From<OutputError> for CliError {
    fn from(err: OutputError) -> Self {
        match err {
            OutputError::Generate(e) => CliError::Generate(e),
            OutputError::Io(e) => CliError::Io(e),
        }
    }
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Parse(_) | CliError::LengthAboveMax { .. } => 2,
            CliError::Generate(e) if e.is_invalid_request() => 2,
            _ => 1,
        }
    }
}

/// Run the CLI and return the process exit status.
pub fn run(args: Vec<String>) -> u8 {
    let result = Context::new(args).and_then(|mut ctx| ctx.run());
    match result {
        Ok(()) => 0,
        Err(err) => {
            report(&err);
            err.exit_code()
        }
    }
}

fn report(err: &CliError) {
    match err {
        CliError::Generate(GenerateError::EntropySource(source)) => {
            error!(error = %source, "entropy source failed");
            prompts::error("Internal error: could not generate a password.");
        }
        CliError::Parse(_) => {
            prompts::error(&err.to_string());
            prompts::error("Try `passgen --help` for usage.");
        }
        _ => prompts::error(&err.to_string()),
    }
}
