use serde::{Deserialize, Serialize};

use super::utils::text_for_diff;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub name: String,
    #[serde(default)]
    pub trigger_type: String,
    #[serde(default)]
    pub event: String,
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_clause: Option<String>,
    #[serde(default)]
    pub status: String,
    /// Schema-qualified header as stored, e.g. `"APP"."TRG_X" BEFORE INSERT ON "APP"."T"`
    pub description: String,
    pub body: String,
}

impl Trigger {
    pub fn db_equals(&self, other: &Trigger) -> bool {
        text_for_diff(&self.description) == text_for_diff(&other.description)
            && text_for_diff(&self.body) == text_for_diff(&other.body)
    }
}
