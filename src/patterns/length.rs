//! Length check - flags passwords below the minimum length.

use super::PatternResult;
use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length, counted in characters
/// rather than bytes.
///
/// # Returns
/// - `Some(description)` if the password is too short
/// - `None` if the password has sufficient length
pub fn length_pattern(password: &SecretString) -> PatternResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some("too short");
    }
    None
}
