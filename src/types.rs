//! Value types produced by password evaluation.

use std::fmt;

/// Qualitative security bucket derived from entropy thresholds.
///
/// `None` is the unscored case: the empty password, which never reaches
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityTier {
    None,
    Precarious,
    Weak,
    Moderate,
    Secure,
    VerySecure,
}

impl SecurityTier {
    /// Numeric score paired with this tier (0 for `None`, 1-5 otherwise).
    pub fn score(&self) -> u8 {
        match self {
            SecurityTier::None => 0,
            SecurityTier::Precarious => 1,
            SecurityTier::Weak => 2,
            SecurityTier::Moderate => 3,
            SecurityTier::Secure => 4,
            SecurityTier::VerySecure => 5,
        }
    }
}

impl fmt::Display for SecurityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SecurityTier::None => "no password",
            SecurityTier::Precarious => "precarious",
            SecurityTier::Weak => "weak",
            SecurityTier::Moderate => "moderate",
            SecurityTier::Secure => "secure",
            SecurityTier::VerySecure => "very secure",
        };
        f.write_str(label)
    }
}

/// Tier and score as returned by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityRating {
    pub tier: SecurityTier,
    pub score: u8,
}

/// Full result of evaluating a single password.
///
/// `weaknesses` preserves the fixed order of the pattern checks so output
/// is reproducible across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub tier: SecurityTier,
    pub score: u8,
    /// Estimated brute-force search space, in bits.
    pub entropy: f64,
    /// Human-readable crack-time estimate at the evaluator's guess rate.
    pub crack_time: String,
    pub weaknesses: Vec<String>,
    /// Password length in characters, not bytes.
    pub length: usize,
}
