//! JSON snapshots of a schema, the file-based schema source and sink

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::catalog::job::Job;
use crate::catalog::sequence::Sequence;
use crate::catalog::source::{Package, Source};
use crate::catalog::synonym::Synonym;
use crate::catalog::table::Table;
use crate::catalog::triggers::Trigger;
use crate::catalog::view::View;
use crate::catalog::{Schema, SchemaBuilder};
use crate::constants::NULL_SCHEMA_ARG;

/// On-disk layout: one list per object category
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaSnapshot {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub procedures: Vec<Source>,
    #[serde(default)]
    pub functions: Vec<Source>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub sequences: Vec<Sequence>,
    #[serde(default)]
    pub synonyms: Vec<Synonym>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub views: Vec<View>,
}

impl From<&Schema> for SchemaSnapshot {
    fn from(schema: &Schema) -> Self {
        let builder = SchemaBuilder::from(schema);
        Self {
            tables: builder.tables,
            packages: builder.packages,
            procedures: builder.procedures,
            functions: builder.functions,
            jobs: builder.jobs,
            sequences: builder.sequences,
            synonyms: builder.synonyms,
            triggers: builder.triggers,
            views: builder.views,
        }
    }
}

impl SchemaSnapshot {
    pub fn into_schema(self) -> Result<Schema> {
        SchemaBuilder {
            tables: self.tables,
            packages: self.packages,
            procedures: self.procedures,
            functions: self.functions,
            jobs: self.jobs,
            sequences: self.sequences,
            synonyms: self.synonyms,
            triggers: self.triggers,
            views: self.views,
        }
        .build()
    }
}

/// Load a schema snapshot. The literal argument `null` yields an empty schema.
pub fn load(path: impl AsRef<Path>) -> Result<Schema> {
    let path = path.as_ref();
    if path.as_os_str() == NULL_SCHEMA_ARG {
        debug!("Using empty schema for '{}'", NULL_SCHEMA_ARG);
        return Ok(Schema::empty());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    let snapshot: SchemaSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
    let schema = snapshot
        .into_schema()
        .with_context(|| format!("Invalid snapshot: {}", path.display()))?;

    info!(
        "Loaded {} objects from {}",
        schema.object_count(),
        path.display()
    );
    Ok(schema)
}

pub fn save(schema: &Schema, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&SchemaSnapshot::from(schema))
        .context("Failed to serialize snapshot")?;
    fs::write(path, json).with_context(|| format!("Failed to write snapshot: {}", path.display()))
}
