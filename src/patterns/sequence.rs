//! Sequence checks - detect ascending numeric and alphabetic runs.

use super::PatternResult;
use secrecy::{ExposeSecret, SecretString};

/// Ascending three-digit runs, including the 8-9-0 wrap.
const NUMERIC_RUNS: [&str; 9] = [
    "012", "123", "234", "345", "456", "567", "678", "789", "890",
];

/// Ascending three-letter runs from a-b-c through i-j-k.
const ALPHABETIC_RUNS: [&str; 9] = [
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", "ijk",
];

/// Checks for any ascending three-digit run (e.g. "123").
///
/// Only the fixed ascending runs match; repeated digits like "111" do not.
///
/// # Returns
/// - `Some(description)` if a numeric run is found
/// - `None` otherwise
pub fn numeric_sequence_pattern(password: &SecretString) -> PatternResult {
    let pwd = password.expose_secret();
    if NUMERIC_RUNS.iter().any(|run| pwd.contains(run)) {
        return Some("numeric sequence");
    }
    None
}

/// Checks for any ascending three-letter run (e.g. "abc"),
/// case-insensitive.
///
/// # Returns
/// - `Some(description)` if an alphabetic run is found
/// - `None` otherwise
pub fn alphabetic_sequence_pattern(password: &SecretString) -> PatternResult {
    let pwd = password.expose_secret().to_lowercase();
    if ALPHABETIC_RUNS.iter().any(|run| pwd.contains(run)) {
        return Some("alphabetic sequence");
    }
    None
}
