//! Name equivalence between environments.
//!
//! A table may carry a different name in each environment (`ORDERS` in dev,
//! `ORDERS_V2` in prod). Equivalence groups declare such names as one object,
//! one group per line of the definition file:
//!
//! ```text
//! table:ORDERS,ORDERS_V2
//! ```
//!
//! The tag before the colon is informational only.

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct Equivalences {
    path: Option<PathBuf>,
    groups: OnceCell<Vec<Vec<String>>>,
}

impl Equivalences {
    /// No groups: names only match case-insensitively.
    pub fn empty() -> Self {
        Self {
            path: None,
            groups: OnceCell::with_value(Vec::new()),
        }
    }

    /// Groups are read from `path` on the first lookup. A missing file means no groups.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
            groups: OnceCell::new(),
        }
    }

    pub fn from_groups<I, G, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups = groups
            .into_iter()
            .map(|group| group.into_iter().map(|n| n.into().to_uppercase()).collect())
            .collect();
        Self {
            path: None,
            groups: OnceCell::with_value(groups),
        }
    }

    /// True if both names denote the same object.
    pub fn matches(&self, name1: &str, name2: &str) -> bool {
        let name1 = name1.to_uppercase();
        let name2 = name2.to_uppercase();
        if name1 == name2 {
            return true;
        }

        self.groups()
            .iter()
            .any(|group| group.contains(&name1) && group.contains(&name2))
    }

    fn groups(&self) -> &[Vec<String>] {
        self.groups.get_or_init(|| match &self.path {
            Some(path) => load_groups(path),
            None => Vec::new(),
        })
    }
}

fn load_groups(path: &Path) -> Vec<Vec<String>> {
    if !path.exists() {
        debug!("No equivalence file at {}", path.display());
        return Vec::new();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let groups = parse_groups(&content);
            debug!(
                "Loaded {} equivalence groups from {}",
                groups.len(),
                path.display()
            );
            groups
        }
        Err(e) => {
            warn!("Could not read equivalence file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Parse `tag:name1,name2,...` lines. Names are stored uppercased.
pub fn parse_groups(content: &str) -> Vec<Vec<String>> {
    let mut groups = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((_tag, names)) = line.split_once(':') else {
            warn!("Skipping malformed equivalence line {}: {}", line_no + 1, line);
            continue;
        };

        let group: Vec<String> = names
            .split(',')
            .map(|n| n.trim().to_uppercase())
            .filter(|n| !n.is_empty())
            .collect();
        if !group.is_empty() {
            groups.push(group);
        }
    }
    groups
}
