//! Turns a schema comparison into an ordered stream of object-level changes
//! and hands each one to the registered listeners.

use anyhow::Result;
use tracing::{debug, info};

use crate::catalog::Schema;
use crate::diff::context::DiffContext;
use crate::diff::operations::{Change, SchemaObject};
use crate::diff::{CategoryDiff, diff_all};

/// Receives every change of a run, in order
pub trait DiffListener {
    fn notify(&mut self, ctx: &DiffContext, change: &Change<'_>) -> Result<()>;

    /// Called once after the last change
    fn finish(&mut self, _ctx: &DiffContext) -> Result<()> {
        Ok(())
    }
}

pub struct DiffManager<'l> {
    listeners: Vec<&'l mut dyn DiffListener>,
}

impl<'l> DiffManager<'l> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: &'l mut dyn DiffListener) {
        self.listeners.push(listener);
    }

    /// Compare both schemas and notify every listener of every change.
    ///
    /// Listeners are called synchronously in registration order. The first
    /// listener error aborts the run. Returns the number of changes.
    pub fn run(&mut self, ctx: &DiffContext, initial: &Schema, target: &Schema) -> Result<usize> {
        let changes = changes(ctx, initial, target);
        info!("Notifying {} changes", changes.len());

        for change in &changes {
            debug!("{} {} {}", change.operation, change.kind, change.name);
            for listener in self.listeners.iter_mut() {
                listener.notify(ctx, change)?;
            }
        }
        for listener in self.listeners.iter_mut() {
            listener.finish(ctx)?;
        }

        Ok(changes.len())
    }
}

impl Default for DiffManager<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Every change needed to go from `initial` to `target`.
///
/// Categories come in a fixed order: tables (with the public synonyms of
/// created and dropped tables), packages, procedures, functions, jobs,
/// sequences, triggers, synonyms and views. Within a category creations come
/// first, then updates, then drops.
pub fn changes<'a>(ctx: &DiffContext, initial: &'a Schema, target: &'a Schema) -> Vec<Change<'a>> {
    let diff = diff_all(ctx, initial, target);
    let mut out = Vec::new();

    for &table in &diff.tables.new {
        out.push(Change::created(SchemaObject::Table(table)));
        for synonym in &table.public_synonyms {
            out.push(Change::created(SchemaObject::PublicSynonym(synonym)));
        }
    }
    for &(old, new) in &diff.tables.changed {
        out.push(Change::updated(SchemaObject::Table(old), SchemaObject::Table(new)));
    }
    for &table in &diff.tables.removed {
        out.push(Change::dropped(SchemaObject::Table(table)));
        for synonym in &table.public_synonyms {
            out.push(Change::dropped(SchemaObject::PublicSynonym(synonym)));
        }
    }

    push_category(&mut out, &diff.packages, SchemaObject::Package);
    push_category(&mut out, &diff.procedures, SchemaObject::Procedure);
    push_category(&mut out, &diff.functions, SchemaObject::Function);
    push_category(&mut out, &diff.jobs, SchemaObject::Job);
    push_category(&mut out, &diff.sequences, SchemaObject::Sequence);
    push_category(&mut out, &diff.triggers, SchemaObject::Trigger);
    push_category(&mut out, &diff.synonyms, SchemaObject::Synonym);
    push_category(&mut out, &diff.views, SchemaObject::View);

    out
}

fn push_category<'a, T>(
    out: &mut Vec<Change<'a>>,
    diff: &CategoryDiff<'a, T>,
    wrap: fn(&'a T) -> SchemaObject<'a>,
) {
    out.extend(diff.new.iter().map(|&o| Change::created(wrap(o))));
    out.extend(
        diff.changed
            .iter()
            .map(|&(old, new)| Change::updated(wrap(old), wrap(new))),
    );
    out.extend(diff.removed.iter().map(|&o| Change::dropped(wrap(o))));
}
