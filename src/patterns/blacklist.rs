//! Blacklist check - flags passwords from the common-password list.

use super::PatternResult;
use crate::blacklist::is_common_password;
use secrecy::{ExposeSecret, SecretString};

/// Checks if the password is a verbatim entry of the common-password list
/// (case-insensitive).
///
/// # Returns
/// - `Some(description)` if the password is a known common password
/// - `None` otherwise
pub fn common_password_pattern(password: &SecretString) -> PatternResult {
    if is_common_password(password.expose_secret()) {
        return Some("common password");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_password_matches() {
        let pwd = SecretString::new("password".to_string().into());
        assert_eq!(common_password_pattern(&pwd), Some("common password"));
    }

    #[test]
    fn test_common_password_case_insensitive() {
        let pwd = SecretString::new("LetMeIn".to_string().into());
        assert_eq!(common_password_pattern(&pwd), Some("common password"));
    }

    #[test]
    fn test_uncommon_password_passes() {
        let pwd = SecretString::new("CorrectHorseBatteryStaple!123".to_string().into());
        assert_eq!(common_password_pattern(&pwd), None);
    }

    #[test]
    fn test_substring_does_not_match() {
        // Membership is verbatim, not substring
        let pwd = SecretString::new("mypassword".to_string().into());
        assert_eq!(common_password_pattern(&pwd), None);
    }
}
