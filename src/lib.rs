//! Password entropy estimation and generation library
//!
//! This library estimates password strength from character-class diversity
//! and length, maps the entropy estimate to a brute-force crack-time and a
//! qualitative security tier, detects a fixed set of weak textual patterns,
//! and generates random passwords from configurable character pools.
//!
//! The estimate is a brute-force search-space proxy, not a rigorous
//! strength model: it does not detect dictionary combinations, keyboard
//! walks or leetspeak substitutions.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_entropy::{evaluate, generate, GeneratorConfig};
//! use secrecy::SecretString;
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let assessment = evaluate(&password);
//! println!("Tier: {} ({}/5)", assessment.tier, assessment.score);
//! println!("Crack time: {}", assessment.crack_time);
//!
//! // Generate one
//! let generated = generate(&GeneratorConfig::default())?;
//! assert_eq!(generated.chars().count(), 16);
//! # Ok::<(), pwd_entropy::GeneratorError>(())
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod generator;
mod patterns;
mod types;

// Public API
pub use blacklist::{common_passwords, is_common_password};
pub use evaluator::{
    DEFAULT_GUESSES_PER_SECOND, Evaluator, classify_security, compute_entropy, detect_patterns,
    estimate_crack_time, evaluate,
};
pub use generator::{DEFAULT_COUNT, GeneratorConfig, GeneratorError, generate, generate_many};
pub use types::{Assessment, SecurityRating, SecurityTier};
