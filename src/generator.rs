//! Random password generation from configurable character pools.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@##%^&()_+-=[]{}|;:,.<>?";

/// Default number of passwords produced by batch generation.
pub const DEFAULT_COUNT: usize = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("no character class selected")]
    NoClassSelected,
}

/// Character pool selection and output length for password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl GeneratorConfig {
    /// Concatenates the enabled pools in fixed order: lowercase, uppercase,
    /// digits, symbols.
    fn alphabet(&self) -> Vec<char> {
        let mut alphabet = String::new();

        if self.include_lowercase {
            alphabet.push_str(LOWERCASE);
        }
        if self.include_uppercase {
            alphabet.push_str(UPPERCASE);
        }
        if self.include_digits {
            alphabet.push_str(DIGITS);
        }
        if self.include_symbols {
            alphabet.push_str(SYMBOLS);
        }

        alphabet.chars().collect()
    }
}

/// Generates one random password.
///
/// Each character is drawn independently and uniformly from the configured
/// alphabet (sampling with replacement), using the thread-local RNG. The
/// draws are not cryptographically secure; substitute a CSPRNG-backed
/// source for security-sensitive use while keeping the same uniform
/// independent-draw contract.
///
/// # Errors
/// Returns [`GeneratorError::NoClassSelected`] if every inclusion flag is
/// false.
pub fn generate(config: &GeneratorConfig) -> Result<String, GeneratorError> {
    let alphabet = config.alphabet();
    if alphabet.is_empty() {
        return Err(GeneratorError::NoClassSelected);
    }

    let mut rng = rand::thread_rng();
    let password: String = (0..config.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(length = config.length, pool = alphabet.len(), "password generated");

    Ok(password)
}

/// Generates `count` passwords independently with the same config.
///
/// Results are collected into a set, so independent draws that coincide
/// collapse and the returned set may hold fewer than `count` passwords.
/// With the default pools and length the chance of a collision is
/// negligible. The usual `count` is [`DEFAULT_COUNT`].
///
/// # Errors
/// Returns [`GeneratorError::NoClassSelected`] if every inclusion flag is
/// false.
pub fn generate_many(
    count: usize,
    config: &GeneratorConfig,
) -> Result<HashSet<String>, GeneratorError> {
    let mut passwords = HashSet::with_capacity(count);
    for _ in 0..count {
        passwords.insert(generate(config)?);
    }
    Ok(passwords)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn union_pool() -> HashSet<char> {
        [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS]
            .concat()
            .chars()
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.length, 16);
        assert!(config.include_lowercase);
        assert!(config.include_uppercase);
        assert!(config.include_digits);
        assert!(config.include_symbols);
    }

    #[test]
    fn test_generate_length_and_pool() {
        let config = GeneratorConfig {
            length: 12,
            ..GeneratorConfig::default()
        };
        let pool = union_pool();

        let password = generate(&config).unwrap();
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| pool.contains(&c)));
    }

    #[test]
    fn test_generate_no_class_selected() {
        let config = GeneratorConfig {
            length: 10,
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
        };
        assert_eq!(generate(&config), Err(GeneratorError::NoClassSelected));
    }

    #[test]
    fn test_generator_error_message() {
        assert_eq!(
            GeneratorError::NoClassSelected.to_string(),
            "no character class selected"
        );
    }

    #[test]
    fn test_generate_digits_only() {
        let config = GeneratorConfig {
            length: 32,
            include_lowercase: false,
            include_uppercase: false,
            include_digits: true,
            include_symbols: false,
        };
        let password = generate(&config).unwrap();
        assert_eq!(password.len(), 32);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_symbols_only() {
        let config = GeneratorConfig {
            length: 32,
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_symbols: true,
        };
        let password = generate(&config).unwrap();
        assert!(password.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn test_generate_is_randomized() {
        let config = GeneratorConfig::default();
        let first = generate(&config).unwrap();
        let second = generate(&config).unwrap();
        // Not guaranteed, but a 16-character collision over an 87-character
        // pool is vanishingly unlikely
        assert_ne!(first, second);
    }

    #[test]
    fn test_generate_many_size_bound() {
        let config = GeneratorConfig::default();
        let passwords = generate_many(DEFAULT_COUNT, &config).unwrap();
        assert!(passwords.len() <= DEFAULT_COUNT);
        assert!(!passwords.is_empty());
        assert!(passwords.iter().all(|p| p.chars().count() == 16));
    }

    #[test]
    fn test_generate_many_no_class_selected() {
        let config = GeneratorConfig {
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            generate_many(3, &config),
            Err(GeneratorError::NoClassSelected)
        );
    }

    #[test]
    fn test_generate_many_zero_count() {
        let passwords = generate_many(0, &GeneratorConfig::default()).unwrap();
        assert!(passwords.is_empty());
    }
}
