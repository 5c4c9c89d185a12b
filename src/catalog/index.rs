//! Indexes and their key columns
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexColumn {
    /// Column name, or the key expression of a function-based index
    pub name: String,
    /// 1-based position in the index key
    pub position: u32,
}

impl IndexColumn {
    pub fn new(name: impl Into<String>, position: u32) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub owner: String,
    pub name: String,
    pub table_name: String,
    #[serde(default)]
    pub tablespace: String,
    /// NORMAL, BITMAP, FUNCTION-BASED NORMAL, ...
    #[serde(default = "default_index_type")]
    pub index_type: String,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub compression: String,
    #[serde(default)]
    pub columns: Vec<IndexColumn>,
}

fn default_index_type() -> String {
    "NORMAL".to_string()
}

impl Index {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            table_name: table_name.into(),
            tablespace: String::new(),
            index_type: default_index_type(),
            unique: false,
            compression: String::new(),
            columns: Vec::new(),
        }
    }

    pub fn is_bitmap(&self) -> bool {
        self.index_type == "BITMAP"
    }

    /// Uniqueness, index type and the ordered key columns must match.
    pub fn db_equals(&self, other: &Index) -> bool {
        self.unique == other.unique
            && self.index_type == other.index_type
            && self.columns == other.columns
    }
}
