//! Tables and their columns
use serde::{Deserialize, Serialize};

use super::constraint::Constraint;
use super::grant::Grant;
use super::index::Index;
use super::synonym::PublicSynonym;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    /// Ordinal position, only used to order columns in a CREATE TABLE
    pub id: u32,
    pub data_type: String,
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub precision: u32,
    #[serde(default)]
    pub scale: u32,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl Column {
    pub fn new(name: impl Into<String>, id: u32, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            data_type: data_type.into(),
            length: 0,
            precision: 0,
            scale: 0,
            nullable: true,
            comment: None,
            default_value: None,
        }
    }

    /// Trimmed default expression, with an absent default reading as empty
    pub fn default_expression(&self) -> &str {
        self.default_value.as_deref().map(str::trim).unwrap_or("")
    }

    /// Structural equality; comments are compared separately.
    pub fn db_equals(&self, other: &Column) -> bool {
        self.data_type == other.data_type
            && self.length == other.length
            && self.precision == other.precision
            && self.scale == other.scale
            && self.nullable == other.nullable
            && self.default_expression() == other.default_expression()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub owner: String,
    pub name: String,
    #[serde(default)]
    pub tablespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub indexes: Vec<Index>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub grants: Vec<Grant>,
    #[serde(default)]
    pub public_synonyms: Vec<PublicSynonym>,
}

impl Table {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            tablespace: String::new(),
            comment: None,
            columns: Vec::new(),
            indexes: Vec::new(),
            constraints: Vec::new(),
            grants: Vec::new(),
            public_synonyms: Vec::new(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indexes.iter().find(|i| i.name == name)
    }

    /// Columns in ordinal order, as they appear in a CREATE TABLE
    pub fn ordered_columns(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.id);
        columns
    }
}
