//! Persisted generation defaults.

mod file;

use crate::pass::GenerationRequest;

pub const DEFAULT_MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    /// Upper bound the front end enforces on requested lengths.
    pub max_length: usize,
    pub output_file_path: String,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    pub fn path() -> String {
        file::get_path()
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.pass_length,
            include_lowercase: self.include_lowercase,
            include_uppercase: self.include_uppercase,
            include_digits: self.include_digits,
            include_symbols: self.include_symbols,
        }
    }

    /// Copy length and class selection back from a request.
    pub fn apply_request(&mut self, request: &GenerationRequest) {
        self.pass_length = request.length;
        self.include_lowercase = request.include_lowercase;
        self.include_uppercase = request.include_uppercase;
        self.include_digits = request.include_digits;
        self.include_symbols = request.include_symbols;
    }
}

impl Default for Settings {
    fn default() -> Self {
        let request = GenerationRequest::default();
        Self {
            pass_length: request.length,
            number_of_passwords: 1,
            include_lowercase: request.include_lowercase,
            include_uppercase: request.include_uppercase,
            include_digits: request.include_digits,
            include_symbols: request.include_symbols,
            max_length: DEFAULT_MAX_LENGTH,
            output_file_path: String::new(),
        }
    }
}
