//! Password generation settings.

use crate::pass::GenerationConfig;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;

#[derive(Debug, Clone)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub use_lowercase: bool,
    pub use_uppercase: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
    pub exclude_duplicates: bool,
    pub exclude_similar: bool,
    pub to_clipboard: bool,
}

impl Settings {
    /// Clamp a requested length into the supported range.
    pub fn clamp_length(length: usize) -> usize {
        length.clamp(MIN_LENGTH, MAX_LENGTH)
    }

    pub fn to_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: Self::clamp_length(self.pass_length),
            lowercase: self.use_lowercase,
            uppercase: self.use_uppercase,
            digits: self.use_digits,
            symbols: self.use_symbols,
            exclude_duplicates: self.exclude_duplicates,
            exclude_similar: self.exclude_similar,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            use_lowercase: true,
            use_uppercase: true,
            use_digits: true,
            use_symbols: true,
            exclude_duplicates: true,
            exclude_similar: true,
            to_clipboard: false,
        }
    }
}
