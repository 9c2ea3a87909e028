//! Character categories and pool building for password generation.

use std::collections::HashSet;

use super::GenerationConfig;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/|";

/// Characters that are easy to misread for one another.
pub const LOOK_ALIKES: &str = "iIl1oO0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl Category {
    /// Every category, in pool order.
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Digit,
        Category::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            Category::Lowercase => LOWERCASE,
            Category::Uppercase => UPPERCASE,
            Category::Digit => DIGITS,
            Category::Symbol => SYMBOLS,
        }
    }

    /// Alphabet with look-alike characters optionally removed.
    pub fn filtered(self, exclude_similar: bool) -> Vec<char> {
        self.alphabet()
            .chars()
            .filter(|c| !exclude_similar || !LOOK_ALIKES.contains(*c))
            .collect()
    }

    pub fn is_selected(self, config: &GenerationConfig) -> bool {
        match self {
            Category::Lowercase => config.lowercase,
            Category::Uppercase => config.uppercase,
            Category::Digit => config.digits,
            Category::Symbol => config.symbols,
        }
    }
}

/// A selected category with its usable characters.
#[derive(Debug, Clone)]
pub struct Group {
    pub category: Category,
    pub chars: Vec<char>,
}

/// The characters a single generation call may draw from.
#[derive(Debug, Clone, Default)]
pub struct CharPool {
    pub groups: Vec<Group>,
    pub all: Vec<char>,
}

impl CharPool {
    /// Build the pool for `config`. A category only contributes when it is
    /// selected and still non-empty after look-alike filtering.
    pub fn build(config: &GenerationConfig) -> Self {
        let groups: Vec<Group> = Category::ALL
            .iter()
            .filter(|cat| cat.is_selected(config))
            .map(|&category| Group {
                category,
                chars: category.filtered(config.exclude_similar),
            })
            .filter(|group| !group.chars.is_empty())
            .collect();

        let all = groups.iter().flat_map(|g| g.chars.iter().copied()).collect();

        Self { groups, all }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() || self.all.is_empty()
    }

    /// Number of distinct characters across all groups.
    pub fn distinct_count(&self) -> usize {
        self.all.iter().collect::<HashSet<_>>().len()
    }
}
