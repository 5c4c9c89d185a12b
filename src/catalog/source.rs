//! Stored program source: procedures, functions and packages.
//!
//! Bodies are opaque text kept as the ordered lines stored by the database,
//! each usually carrying its own trailing newline.
use serde::{Deserialize, Serialize};

use super::utils::source_for_diff;

/// A procedure or a function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    #[serde(default)]
    pub body: Vec<String>,
}

impl Source {
    pub fn db_equals(&self, other: &Source, ignore_comments: bool) -> bool {
        source_for_diff(&self.body, ignore_comments) == source_for_diff(&other.body, ignore_comments)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    /// Package specification lines
    #[serde(default)]
    pub declaration: Vec<String>,
    /// Package body lines
    #[serde(default)]
    pub body: Vec<String>,
}

impl Package {
    pub fn db_equals(&self, other: &Package, ignore_comments: bool) -> bool {
        source_for_diff(&self.declaration, ignore_comments)
            == source_for_diff(&other.declaration, ignore_comments)
            && source_for_diff(&self.body, ignore_comments)
                == source_for_diff(&other.body, ignore_comments)
    }
}
