//! Entropy estimate for a request.

use std::fmt;

use super::{GenerationRequest, charset};

/// Coarse rating of an entropy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Lower bound in bits for each rating above `Weak`.
    const THRESHOLDS: [(f64, Strength); 3] = [
        (128.0, Strength::VeryStrong),
        (60.0, Strength::Strong),
        (36.0, Strength::Fair),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `length * log2(pool size)`; an empty pool carries no entropy.
pub fn entropy_bits(request: &GenerationRequest) -> f64 {
    match charset::size(request) {
        0 => 0.0,
        pool => request.length as f64 * (pool as f64).log2(),
    }
}

pub fn label(bits: f64) -> Strength {
    Strength::THRESHOLDS
        .into_iter()
        .find(|(min, _)| bits >= *min)
        .map_or(Strength::Weak, |(_, strength)| strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharacterClass;

    #[test]
    fn digits_only_pin() {
        let request = GenerationRequest::none(4).with(CharacterClass::Digit, true);
        let bits = entropy_bits(&request);
        assert!((bits - 4.0 * 10f64.log2()).abs() < 1e-9);
        assert_eq!(label(bits), Strength::Weak);
    }

    #[test]
    fn full_pool_default_length() {
        let bits = entropy_bits(&GenerationRequest::default());
        // 12 * log2(88) ~= 77.5
        assert!(bits > 77.0 && bits < 78.0);
        assert_eq!(label(bits), Strength::Strong);
    }

    #[test]
    fn label_boundaries() {
        assert_eq!(label(35.9), Strength::Weak);
        assert_eq!(label(36.0), Strength::Fair);
        assert_eq!(label(59.99), Strength::Fair);
        assert_eq!(label(60.0), Strength::Strong);
        assert_eq!(label(128.0), Strength::VeryStrong);
        assert_eq!(label(128.0).to_string(), "Very Strong");
    }

    #[test]
    fn empty_pool_has_no_entropy() {
        assert_eq!(entropy_bits(&GenerationRequest::none(20)), 0.0);
        assert_eq!(label(0.0), Strength::Weak);
    }
}
