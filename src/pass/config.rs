use super::charset::Category;

/// Inputs for a single generation call.
///
/// The core does not clamp `length`; callers keep it inside
/// [`MIN_LENGTH`](crate::settings::MIN_LENGTH)..=[`MAX_LENGTH`](crate::settings::MAX_LENGTH).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_duplicates: bool,
    pub exclude_similar: bool,
}

impl GenerationConfig {
    /// Categories switched on, in pool order.
    pub fn selected(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|cat| cat.is_selected(self))
            .collect()
    }
}
