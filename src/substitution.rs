//! Substitution of environment-specific identifiers in generated DDL.
//!
//! Grantees and tablespaces often differ between environments. Each named table
//! (`usersroles`, `tablespaces`) maps an identifier found in the schema to the one
//! that should appear in the script. Tables live in `<dir>/<name>.txt` as
//! `key=value` lines and are loaded on first use.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

pub const TABLESPACES: &str = "tablespaces";
pub const USERS_ROLES: &str = "usersroles";

#[derive(Debug)]
pub struct Substitutions {
    dir: Option<PathBuf>,
    auto_learn: bool,
    tables: Mutex<BTreeMap<String, BTreeMap<String, String>>>,
}

impl Default for Substitutions {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Substitutions {
    /// Tables backed by files in `dir`. With `auto_learn`, unknown keys are recorded
    /// as identity mappings and the table file is rewritten.
    pub fn from_dir(dir: impl AsRef<Path>, auto_learn: bool) -> Self {
        Self {
            dir: Some(dir.as_ref().to_path_buf()),
            auto_learn,
            tables: Mutex::new(BTreeMap::new()),
        }
    }

    /// Empty tables with no persistence; every key maps to itself.
    pub fn in_memory() -> Self {
        Self {
            dir: None,
            auto_learn: false,
            tables: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn with_mapping(self, table: &str, key: &str, value: &str) -> Self {
        self.lock_tables()
            .entry(table.to_string())
            .or_insert_with(|| self.load(table))
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Canonical replacement for `key` in `table`, or `key` itself.
    pub fn substitute(&self, table: &str, key: &str) -> String {
        if key.is_empty() {
            return String::new();
        }

        let mut tables = self.lock_tables();
        let entries = tables
            .entry(table.to_string())
            .or_insert_with(|| self.load(table));

        if let Some(value) = entries.get(key) {
            return value.clone();
        }

        if self.auto_learn && !entries.values().any(|v| v == key) {
            entries.insert(key.to_string(), key.to_string());
            if let Err(e) = self.save(table, entries) {
                warn!("Could not save substitution table '{}': {:#}", table, e);
            }
        }

        key.to_string()
    }

    /// A panic while the tables were held leaves them usable; the poison is logged and cleared.
    fn lock_tables(&self) -> MutexGuard<'_, BTreeMap<String, BTreeMap<String, String>>> {
        self.tables.lock().unwrap_or_else(|poisoned| {
            warn!("Substitution tables were poisoned by a panic, continuing with their last state");
            self.tables.clear_poison();
            poisoned.into_inner()
        })
    }

    fn table_path(&self, table: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|d| d.join(format!("{}.txt", table)))
    }

    fn load(&self, table: &str) -> BTreeMap<String, String> {
        let Some(path) = self.table_path(table) else {
            return BTreeMap::new();
        };
        if !path.exists() {
            return BTreeMap::new();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let entries = parse_table(&content);
                debug!(
                    "Loaded {} substitutions from {}",
                    entries.len(),
                    path.display()
                );
                entries
            }
            Err(e) => {
                warn!("Could not read substitution file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        }
    }

    fn save(&self, table: &str, entries: &BTreeMap<String, String>) -> Result<()> {
        let Some(path) = self.table_path(table) else {
            return Ok(());
        };

        let content: String = entries
            .iter()
            .map(|(key, value)| format!("{}={}\n", key, value))
            .collect();
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Parse `key=value` lines; blank and malformed lines are skipped.
pub fn parse_table(content: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
            None => warn!("Skipping malformed substitution line: {}", line),
        }
    }
    entries
}
