//! Password evaluator - entropy, crack time and classification.

use secrecy::{ExposeSecret, SecretString};

use crate::patterns::{
    PatternResult, alphabetic_sequence_pattern, common_password_pattern, length_pattern,
    numeric_sequence_pattern, repeated_characters_pattern,
};
use crate::types::{Assessment, SecurityRating, SecurityTier};

/// Default attacker guess rate, in guesses per second.
pub const DEFAULT_GUESSES_PER_SECOND: f64 = 10_000_000_000.0;

/// Symbols recognised by the evaluator. The class contributes a fixed 23
/// to the alphabet regardless of this string's length.
const SYMBOLS: &str = "!@#$%+^&*()_+-=[]{}|;:,.<>?";
const SYMBOL_SPACE: usize = 23;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86400.0;
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Pattern checks in evaluation order. All matches are collected, so the
/// order fixes the order of reported weaknesses.
const PATTERN_CHECKS: [fn(&SecretString) -> PatternResult; 5] = [
    common_password_pattern,
    numeric_sequence_pattern,
    alphabetic_sequence_pattern,
    repeated_characters_pattern,
    length_pattern,
];

/// Password evaluator with a configurable attacker guess rate.
#[derive(Debug, Clone)]
pub struct Evaluator {
    guesses_per_second: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
        }
    }
}

impl Evaluator {
    /// Creates an evaluator at the default guess rate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with a custom attacker guess rate.
    pub fn with_guess_rate(guesses_per_second: f64) -> Self {
        Self { guesses_per_second }
    }

    /// Formats the estimated time to exhaust `2^entropy` combinations at
    /// this evaluator's guess rate.
    ///
    /// Durations are bucketed into seconds, minutes, hours, days, years,
    /// thousand years and million years, each to two decimal places; beyond
    /// that, billions of years in scientific notation.
    pub fn estimate_crack_time(&self, entropy: f64) -> String {
        let combinations = 2f64.powf(entropy);
        let seconds = combinations / self.guesses_per_second;

        if seconds < SECONDS_PER_MINUTE {
            format!("{seconds:.2} seconds")
        } else if seconds < SECONDS_PER_HOUR {
            format!("{:.2} minutes", seconds / SECONDS_PER_MINUTE)
        } else if seconds < SECONDS_PER_DAY {
            format!("{:.2} hours", seconds / SECONDS_PER_HOUR)
        } else if seconds < SECONDS_PER_YEAR {
            format!("{:.2} days", seconds / SECONDS_PER_DAY)
        } else if seconds < SECONDS_PER_YEAR * 1e3 {
            format!("{:.2} years", seconds / SECONDS_PER_YEAR)
        } else if seconds < SECONDS_PER_YEAR * 1e6 {
            format!("{:.2} thousand years", seconds / (SECONDS_PER_YEAR * 1e3))
        } else if seconds < SECONDS_PER_YEAR * 1e9 {
            format!("{:.2} million years", seconds / (SECONDS_PER_YEAR * 1e6))
        } else {
            format!("{:.2e} billion years", seconds / (SECONDS_PER_YEAR * 1e9))
        }
    }

    /// Evaluates a password and returns the full assessment.
    ///
    /// Total over any string input: the empty password maps to the fixed
    /// unscored assessment without running the other operations.
    ///
    /// # Arguments
    /// * `password` - The password to evaluate
    ///
    /// # Returns
    /// An `Assessment` with entropy, crack time, tier, weaknesses and length.
    pub fn evaluate(&self, password: &SecretString) -> Assessment {
        let length = password.expose_secret().chars().count();

        if length == 0 {
            return Assessment {
                tier: SecurityTier::None,
                score: 0,
                entropy: 0.0,
                crack_time: "0 seconds".to_string(),
                weaknesses: vec!["no password to evaluate".to_string()],
                length: 0,
            };
        }

        let entropy = compute_entropy(password);
        let crack_time = self.estimate_crack_time(entropy);
        let weaknesses = detect_patterns(password);
        let rating = classify_security(entropy);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            entropy,
            tier = %rating.tier,
            weaknesses = weaknesses.len(),
            "password evaluated"
        );

        Assessment {
            tier: rating.tier,
            score: rating.score,
            entropy,
            crack_time,
            weaknesses,
            length,
        }
    }
}

/// Computes the entropy estimate of a password, in bits.
///
/// The alphabet size is the sum of the sizes of the character classes
/// present (lowercase 26, uppercase 26, digits 10, symbols 23), and the
/// entropy is `length * log2(alphabet)`. A password containing no
/// classified character has entropy 0.
pub fn compute_entropy(password: &SecretString) -> f64 {
    let pwd = password.expose_secret();

    let mut alphabet = 0usize;
    if pwd.chars().any(|c| c.is_lowercase()) {
        alphabet += 26;
    }
    if pwd.chars().any(|c| c.is_uppercase()) {
        alphabet += 26;
    }
    if pwd.chars().any(|c| c.is_numeric()) {
        alphabet += 10;
    }
    if pwd.chars().any(|c| SYMBOLS.contains(c)) {
        alphabet += SYMBOL_SPACE;
    }

    if alphabet == 0 {
        return 0.0;
    }

    pwd.chars().count() as f64 * (alphabet as f64).log2()
}

/// Formats the estimated crack time at the default guess rate.
pub fn estimate_crack_time(entropy: f64) -> String {
    Evaluator::default().estimate_crack_time(entropy)
}

/// Runs the weak-pattern checks in their fixed order and collects every
/// match.
pub fn detect_patterns(password: &SecretString) -> Vec<String> {
    let mut weaknesses = Vec::new();

    for check in PATTERN_CHECKS {
        if let Some(description) = check(password) {
            weaknesses.push(description.to_string());
        }
    }

    weaknesses
}

/// Classifies entropy into a security tier and score.
///
/// Thresholds are strict: entropy below 28 is precarious, below 36 weak,
/// below 60 moderate, below 80 secure, and very secure from 80 up.
pub fn classify_security(entropy: f64) -> SecurityRating {
    let tier = if entropy < 28.0 {
        SecurityTier::Precarious
    } else if entropy < 36.0 {
        SecurityTier::Weak
    } else if entropy < 60.0 {
        SecurityTier::Moderate
    } else if entropy < 80.0 {
        SecurityTier::Secure
    } else {
        SecurityTier::VerySecure
    };

    SecurityRating {
        tier,
        score: tier.score(),
    }
}

/// Evaluates a password at the default guess rate.
pub fn evaluate(password: &SecretString) -> Assessment {
    Evaluator::default().evaluate(password)
}
