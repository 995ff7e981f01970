//! Character classes and pool building.

use super::GenerationRequest;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{};:,./<>?";

/// A named, fixed alphabet that can be requested independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class in priority order. When the length is too short to seed
    /// every selected class, earlier entries win.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Symbol => "symbols",
        }
    }

    /// The class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

/// Build the pool: selected alphabets concatenated in priority order.
pub fn build(request: &GenerationRequest) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(request));
    for class in request.selected() {
        chars.extend_from_slice(class.alphabet());
    }
    chars
}

/// Pool size for a request (for entropy calculation).
pub fn size(request: &GenerationRequest) -> usize {
    request.selected().map(|class| class.alphabet().len()).sum()
}
