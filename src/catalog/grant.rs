use serde::{Deserialize, Serialize};

/// Object privileges held by one grantee on a table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grant {
    pub grantee: String,
    pub select: bool,
    pub insert: bool,
    pub delete: bool,
    pub update: bool,
    pub references: bool,
    pub alter: bool,
    pub index: bool,
}

impl Grant {
    pub fn new(grantee: impl Into<String>) -> Self {
        Self {
            grantee: grantee.into(),
            ..Self::default()
        }
    }

    /// Privilege keywords in their canonical GRANT order
    pub fn privileges(&self) -> Vec<&'static str> {
        [
            (self.select, "SELECT"),
            (self.insert, "INSERT"),
            (self.delete, "DELETE"),
            (self.update, "UPDATE"),
            (self.references, "REFERENCES"),
            (self.alter, "ALTER"),
            (self.index, "INDEX"),
        ]
        .into_iter()
        .filter_map(|(held, keyword)| held.then_some(keyword))
        .collect()
    }
}
