//! Table constraints. Carried with the table but never diffed or rendered.
use serde::{Deserialize, Serialize};

use super::index::IndexColumn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintType {
    #[serde(rename = "P")]
    PrimaryKey,
    #[serde(rename = "U")]
    Unique,
    #[serde(rename = "R")]
    ForeignKey,
    #[serde(rename = "C")]
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub name: String,
    pub constraint_type: ConstraintType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_constraint_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_rule: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub deferrable: String,
    #[serde(default)]
    pub deferred: String,
    #[serde(default)]
    pub validated: String,
    #[serde(default)]
    pub generated: String,
    #[serde(default)]
    pub columns: Vec<IndexColumn>,
}
