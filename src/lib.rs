//! Random password generation and heuristic strength scoring.
//!
//! ```
//! use keypass::{estimate_score, generate_secure, GenerationConfig};
//!
//! let config = GenerationConfig {
//!     length: 16,
//!     lowercase: true,
//!     uppercase: true,
//!     digits: true,
//!     symbols: false,
//!     exclude_duplicates: true,
//!     exclude_similar: true,
//! };
//! let password = generate_secure(&config).unwrap();
//! assert_eq!(password.chars().count(), 16);
//! assert!(estimate_score(&password) <= 100);
//! ```

pub mod error;
pub mod pass;
pub mod random;
pub mod settings;
pub mod strength;

pub use error::{GenerateError, RandomError};
pub use pass::{generate, generate_secure, Category, GenerationConfig};
pub use random::RandomSource;
pub use settings::Settings;
pub use strength::{estimate_score, estimate_tier, StrengthTier};
