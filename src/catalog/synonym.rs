use serde::{Deserialize, Serialize};

/// Public synonym attached to a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicSynonym {
    pub name: String,
    pub table_owner: String,
    pub table_name: String,
}

/// Private synonym pointing at another owner's table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub owner: String,
    pub name: String,
    pub table_owner: String,
    pub table_name: String,
}

impl Synonym {
    pub fn db_equals(&self, other: &Synonym) -> bool {
        self.table_owner == other.table_owner && self.table_name == other.table_name
    }
}
