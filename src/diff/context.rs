use serde::{Deserialize, Serialize};

use super::equivalence::Equivalences;
use crate::substitution::Substitutions;

/// Switches controlling what counts as a difference and how DDL is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Emit tablespace clauses on table and index creation
    pub with_tablespace: bool,
    /// Skip `--` lines when comparing stored program source
    pub ignore_source_comments: bool,
    /// Do not report comment-only changes on existing table columns
    pub ignore_object_comments: bool,
    /// Leave grants out of table creation scripts
    pub ignore_grant_changes: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            with_tablespace: false,
            ignore_source_comments: true,
            ignore_object_comments: true,
            ignore_grant_changes: true,
        }
    }
}

/// Everything a comparison or a renderer needs besides the two objects.
#[derive(Debug, Default)]
pub struct DiffContext {
    pub options: DiffOptions,
    pub equivalences: Equivalences,
    pub substitutions: Substitutions,
}

impl DiffContext {
    pub fn new(options: DiffOptions) -> Self {
        Self {
            options,
            equivalences: Equivalences::empty(),
            substitutions: Substitutions::in_memory(),
        }
    }

    pub fn with_equivalences(mut self, equivalences: Equivalences) -> Self {
        self.equivalences = equivalences;
        self
    }

    pub fn with_substitutions(mut self, substitutions: Substitutions) -> Self {
        self.substitutions = substitutions;
        self
    }
}
