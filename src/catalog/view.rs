use serde::{Deserialize, Serialize};

use super::utils::text_for_diff;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<String>,
    /// Defining query text
    pub source: String,
}

impl View {
    pub fn db_equals(&self, other: &View) -> bool {
        text_for_diff(&self.source) == text_for_diff(&other.source) && self.columns == other.columns
    }
}
