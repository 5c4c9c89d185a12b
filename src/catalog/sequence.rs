use serde::{Deserialize, Serialize};

/// Sequence definition. Bounds are kept as decimal text since Oracle allows 28 digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub name: String,
    pub min_value: String,
    pub max_value: String,
    pub increment_by: String,
    #[serde(default)]
    pub cycle: bool,
    #[serde(default)]
    pub order: bool,
    #[serde(default)]
    pub cache_size: u32,
    /// Last known value, used as the START WITH seed and never compared
    #[serde(default)]
    pub last_number: String,
}

impl Sequence {
    pub fn db_equals(&self, other: &Sequence) -> bool {
        self.min_value == other.min_value
            && self.max_value == other.max_value
            && self.increment_by == other.increment_by
            && self.cycle == other.cycle
            && self.order == other.order
            && self.cache_size == other.cache_size
    }
}
