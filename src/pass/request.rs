use super::CharacterClass;

/// Composition constraints for one generation call.
///
/// The core accepts any non-zero length; upper bounds are a policy of
/// whoever builds the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl GenerationRequest {
    /// Every class selected.
    pub fn all(length: usize) -> Self {
        Self {
            length,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }

    /// No class selected. Useful as a base for builder-style setup.
    pub fn none(length: usize) -> Self {
        Self {
            length,
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
        }
    }

    pub fn with(mut self, class: CharacterClass, on: bool) -> Self {
        self.set(class, on);
        self
    }

    pub fn set(&mut self, class: CharacterClass, on: bool) {
        match class {
            CharacterClass::Lowercase => self.include_lowercase = on,
            CharacterClass::Uppercase => self.include_uppercase = on,
            CharacterClass::Digit => self.include_digits = on,
            CharacterClass::Symbol => self.include_symbols = on,
        }
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Digit => self.include_digits,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    /// Selected classes in priority order.
    pub fn selected(&self) -> impl Iterator<Item = CharacterClass> {
        let this = *self;
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| this.includes(*class))
    }

    pub fn class_count(&self) -> usize {
        self.selected().count()
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::all(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_keeps_priority_order() {
        let request = GenerationRequest::none(4)
            .with(CharacterClass::Symbol, true)
            .with(CharacterClass::Lowercase, true);
        let selected: Vec<_> = request.selected().collect();
        assert_eq!(
            selected,
            vec![CharacterClass::Lowercase, CharacterClass::Symbol]
        );
        assert_eq!(request.class_count(), 2);
    }

    #[test]
    fn set_toggles_single_flag() {
        let mut request = GenerationRequest::default();
        request.set(CharacterClass::Digit, false);
        assert!(!request.include_digits);
        assert!(request.include_lowercase && request.include_uppercase && request.include_symbols);
        assert_eq!(request.length, 12);
    }
}
