pub mod columns;
pub mod context;
pub mod equivalence;
pub mod indexes;
pub mod manager;
pub mod operations;
pub mod sequences;
pub mod tables;

use crate::catalog::{
    Schema, job::Job, sequence::Sequence, source::Package, source::Source, synonym::Synonym,
    table::Table, triggers::Trigger, view::View,
};
use crate::diff::context::DiffContext;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// What differs in one object category between an initial and a final schema
#[derive(Debug)]
pub struct CategoryDiff<'a, T> {
    /// Present in the final schema only
    pub new: Vec<&'a T>,
    /// Present in the initial schema only
    pub removed: Vec<&'a T>,
    /// (initial, final) pairs that are not equal
    pub changed: Vec<(&'a T, &'a T)>,
}

impl<T> CategoryDiff<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.new.len() + self.removed.len() + self.changed.len()
    }
}

/// Per-category differences, one field per object category
#[derive(Debug)]
pub struct SchemaDiff<'a> {
    pub tables: CategoryDiff<'a, Table>,
    pub packages: CategoryDiff<'a, Package>,
    pub procedures: CategoryDiff<'a, Source>,
    pub functions: CategoryDiff<'a, Source>,
    pub jobs: CategoryDiff<'a, Job>,
    pub sequences: CategoryDiff<'a, Sequence>,
    pub triggers: CategoryDiff<'a, Trigger>,
    pub synonyms: CategoryDiff<'a, Synonym>,
    pub views: CategoryDiff<'a, View>,
}

pub fn diff_all<'a>(ctx: &DiffContext, old: &'a Schema, new: &'a Schema) -> SchemaDiff<'a> {
    info!("Diffing schemas...");
    let ignore_comments = ctx.options.ignore_source_comments;

    let result = SchemaDiff {
        tables: tables::diff(ctx, old.tables(), new.tables()),
        packages: diff_by_name(old.packages(), new.packages(), |a, b| {
            a.db_equals(b, ignore_comments)
        }),
        procedures: diff_by_name(old.procedures(), new.procedures(), |a, b| {
            a.db_equals(b, ignore_comments)
        }),
        functions: diff_by_name(old.functions(), new.functions(), |a, b| {
            a.db_equals(b, ignore_comments)
        }),
        jobs: diff_by_name(old.jobs(), new.jobs(), Job::db_equals),
        sequences: diff_by_name(old.sequences(), new.sequences(), Sequence::db_equals),
        triggers: diff_by_name(old.triggers(), new.triggers(), Trigger::db_equals),
        synonyms: diff_by_name(old.synonyms(), new.synonyms(), Synonym::db_equals),
        views: diff_by_name(old.views(), new.views(), View::db_equals),
    };

    debug!(
        "tables: {}, packages: {}, procedures: {}, functions: {}, jobs: {}, sequences: {}, triggers: {}, synonyms: {}, views: {}",
        result.tables.len(),
        result.packages.len(),
        result.procedures.len(),
        result.functions.len(),
        result.jobs.len(),
        result.sequences.len(),
        result.triggers.len(),
        result.synonyms.len(),
        result.views.len()
    );
    info!("Diff complete");
    result
}

/// Match objects by exact name and classify them as new, removed or changed.
pub fn diff_by_name<'a, T>(
    old: &'a BTreeMap<String, T>,
    new: &'a BTreeMap<String, T>,
    equals: impl Fn(&T, &T) -> bool,
) -> CategoryDiff<'a, T> {
    let mut result = CategoryDiff {
        new: Vec::new(),
        removed: Vec::new(),
        changed: Vec::new(),
    };

    for (name, new_obj) in new {
        match old.get(name) {
            None => result.new.push(new_obj),
            Some(old_obj) if !equals(old_obj, new_obj) => result.changed.push((old_obj, new_obj)),
            Some(_) => {}
        }
    }

    result.removed = old
        .iter()
        .filter(|(name, _)| !new.contains_key(*name))
        .map(|(_, obj)| obj)
        .collect();

    result
}
