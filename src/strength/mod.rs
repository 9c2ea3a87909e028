//! Heuristic password strength scoring.
//!
//! The score is an entropy estimate normalised against a 20 character
//! password drawn from the full 95 character alphabet, minus penalties for
//! common weak patterns. It is clamped to `0..=100`.

mod penalty;
mod tier;

pub use tier::StrengthTier;

/// Alphabet size the reference entropy is measured against.
const FULL_CHARSPACE: f64 = 95.0;

/// Length that maps to a full entropy score.
const REFERENCE_LENGTH: f64 = 20.0;

/// Which character classes occur in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Classes {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl Classes {
    pub fn of(chars: &[char]) -> Self {
        chars.iter().fold(Self::default(), |acc, &c| Self {
            lower: acc.lower || c.is_lowercase(),
            upper: acc.upper || c.is_uppercase(),
            digit: acc.digit || c.is_numeric(),
            symbol: acc.symbol || !c.is_alphanumeric(),
        })
    }

    pub fn only_digits(self) -> bool {
        self.digit && !self.lower && !self.upper && !self.symbol
    }

    /// Size of the alphabet implied by the classes present, never zero.
    pub fn char_space(self) -> u32 {
        let mut space = 0;
        if self.lower {
            space += 26;
        }
        if self.upper {
            space += 26;
        }
        if self.digit {
            space += 10;
        }
        if self.symbol {
            space += 33;
        }
        space.max(1)
    }
}

/// Estimated entropy in bits.
pub fn calculate_entropy(length: usize, char_space: u32) -> f64 {
    length as f64 * f64::from(char_space).log2()
}

/// Score `password` from 0 (trivial) to 100.
pub fn estimate_score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let chars: Vec<char> = password.chars().collect();
    let classes = Classes::of(&chars);

    let score = entropy_score(chars.len(), classes.char_space()) + penalty::total(&chars, classes);
    score.clamp(0, 100) as u8
}

/// Score `password` and bucket it.
pub fn estimate_tier(password: &str) -> StrengthTier {
    StrengthTier::from_score(estimate_score(password))
}

fn entropy_score(length: usize, char_space: u32) -> i32 {
    let bits = calculate_entropy(length, char_space);
    let reference = REFERENCE_LENGTH * FULL_CHARSPACE.log2();
    // Saturating float-to-int cast truncates toward zero.
    (bits * 100.0 / reference) as i32
}
