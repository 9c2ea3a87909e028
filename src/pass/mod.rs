//! Password generation.

pub mod charset;
mod config;
mod generate;

pub use charset::{CharPool, Category, LOOK_ALIKES};
pub use config::GenerationConfig;
pub use generate::{generate, generate_secure};
