//! Weak-pattern checks
//!
//! Each check looks for one fixed textual weakness. The evaluator runs
//! them in a fixed order and collects every match.

mod blacklist;
mod length;
mod repeat;
mod sequence;

pub use blacklist::common_password_pattern;
pub use length::length_pattern;
pub use repeat::repeated_characters_pattern;
pub use sequence::{alphabetic_sequence_pattern, numeric_sequence_pattern};

/// Result type for pattern check functions.
/// - `Some(description)` - Check matched a weakness
/// - `None` - Check passed
pub type PatternResult = Option<&'static str>;
