//! Common-password blacklist.
//!
//! A fixed set of known-weak passwords, initialized once and shared
//! read-only across all evaluations.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Known-weak passwords, stored lowercase. Membership is case-insensitive.
const COMMON_PASSWORD_LIST: [&str; 14] = [
    "password", "123456", "qwerty", "abc123", "admin", "letmein", "welcome",
    "monkey", "dragon", "12345678", "password1", "iloveyou", "princess",
    "starwars",
];

static COMMON_PASSWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_PASSWORD_LIST.into_iter().collect());

/// Checks if a password is in the common-password blacklist.
///
/// Returns `true` if the password matches a blacklist entry
/// (case-insensitive).
pub fn is_common_password(password: &str) -> bool {
    COMMON_PASSWORDS.contains(password.to_lowercase().as_str())
}

/// Returns the full blacklist.
pub fn common_passwords() -> &'static HashSet<&'static str> {
    &COMMON_PASSWORDS
}
