use crate::catalog::Schema;
use crate::config::types::Objects;
use glob::{MatchOptions, Pattern};
use tracing::debug;

const CASE_INSENSITIVE: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Object filter deciding which schema objects take part in a comparison
pub struct ObjectFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl ObjectFilter {
    /// Create a new object filter from configuration. Invalid patterns never match.
    pub fn new(config: &Objects) -> Self {
        Self {
            include: compile(&config.include),
            exclude: compile(&config.exclude),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Check if an object should be compared
    pub fn should_include(&self, name: &str) -> bool {
        // Exclude patterns win over include patterns
        if matches_any(&self.exclude, name) {
            return false;
        }

        // If include patterns are specified, the name must match one of them
        if !self.include.is_empty() {
            return matches_any(&self.include, name);
        }

        true
    }

    /// Apply filter to a schema, removing objects that shouldn't be compared
    pub fn filter_schema(&self, schema: Schema) -> Schema {
        if self.is_empty() {
            return schema;
        }
        let before = schema.object_count();
        let filtered = schema.retain_objects(|name| self.should_include(name));
        debug!(
            "Object filter kept {} of {} objects",
            filtered.object_count(),
            before
        );
        filtered
    }
}

fn compile(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect()
}

fn matches_any(patterns: &[Pattern], name: &str) -> bool {
    patterns
        .iter()
        .any(|p| p.matches_with(name, CASE_INSENSITIVE))
}
