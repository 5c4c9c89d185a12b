use anyhow::{Result, bail};
use std::collections::BTreeMap;

pub mod constraint;
pub mod grant;
pub mod index;
pub mod job;
pub mod sequence;
pub mod source;
pub mod synonym;
pub mod table;
pub mod triggers;
pub mod utils;
pub mod view;

use job::Job;
use sequence::Sequence;
use source::{Package, Source};
use synonym::Synonym;
use table::Table;
use triggers::Trigger;
use view::View;

/// Immutable snapshot of one Oracle schema.
///
/// Every category is keyed by object name, so iteration is always in name order.
/// Build one with [`SchemaBuilder`]; a finished schema is only ever read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    tables: BTreeMap<String, Table>,
    packages: BTreeMap<String, Package>,
    procedures: BTreeMap<String, Source>,
    functions: BTreeMap<String, Source>,
    jobs: BTreeMap<String, Job>,
    sequences: BTreeMap<String, Sequence>,
    synonyms: BTreeMap<String, Synonym>,
    triggers: BTreeMap<String, Trigger>,
    views: BTreeMap<String, View>,
}

impl Schema {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tables(&self) -> &BTreeMap<String, Table> {
        &self.tables
    }

    pub fn packages(&self) -> &BTreeMap<String, Package> {
        &self.packages
    }

    pub fn procedures(&self) -> &BTreeMap<String, Source> {
        &self.procedures
    }

    pub fn functions(&self) -> &BTreeMap<String, Source> {
        &self.functions
    }

    pub fn jobs(&self) -> &BTreeMap<String, Job> {
        &self.jobs
    }

    pub fn sequences(&self) -> &BTreeMap<String, Sequence> {
        &self.sequences
    }

    pub fn synonyms(&self) -> &BTreeMap<String, Synonym> {
        &self.synonyms
    }

    pub fn triggers(&self) -> &BTreeMap<String, Trigger> {
        &self.triggers
    }

    pub fn views(&self) -> &BTreeMap<String, View> {
        &self.views
    }

    pub fn object_count(&self) -> usize {
        self.tables.len()
            + self.packages.len()
            + self.procedures.len()
            + self.functions.len()
            + self.jobs.len()
            + self.sequences.len()
            + self.synonyms.len()
            + self.triggers.len()
            + self.views.len()
    }

    /// Keep only the objects whose name passes `keep`, in every category.
    pub fn retain_objects(mut self, keep: impl Fn(&str) -> bool) -> Self {
        self.tables.retain(|name, _| keep(name));
        self.packages.retain(|name, _| keep(name));
        self.procedures.retain(|name, _| keep(name));
        self.functions.retain(|name, _| keep(name));
        self.jobs.retain(|name, _| keep(name));
        self.sequences.retain(|name, _| keep(name));
        self.synonyms.retain(|name, _| keep(name));
        self.triggers.retain(|name, _| keep(name));
        self.views.retain(|name, _| keep(name));
        self
    }
}

/// Collects objects while a schema is being acquired, then freezes them into a [`Schema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    pub tables: Vec<Table>,
    pub packages: Vec<Package>,
    pub procedures: Vec<Source>,
    pub functions: Vec<Source>,
    pub jobs: Vec<Job>,
    pub sequences: Vec<Sequence>,
    pub synonyms: Vec<Synonym>,
    pub triggers: Vec<Trigger>,
    pub views: Vec<View>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    pub fn procedure(mut self, procedure: Source) -> Self {
        self.procedures.push(procedure);
        self
    }

    pub fn function(mut self, function: Source) -> Self {
        self.functions.push(function);
        self
    }

    pub fn job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn sequence(mut self, sequence: Sequence) -> Self {
        self.sequences.push(sequence);
        self
    }

    pub fn synonym(mut self, synonym: Synonym) -> Self {
        self.synonyms.push(synonym);
        self
    }

    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    pub fn view(mut self, view: View) -> Self {
        self.views.push(view);
        self
    }

    /// Freeze the collected objects. Fails if a name repeats within a category.
    pub fn build(self) -> Result<Schema> {
        Ok(Schema {
            tables: keyed("table", self.tables, |t| &t.name)?,
            packages: keyed("package", self.packages, |p| &p.name)?,
            procedures: keyed("procedure", self.procedures, |p| &p.name)?,
            functions: keyed("function", self.functions, |f| &f.name)?,
            jobs: keyed("job", self.jobs, |j| &j.name)?,
            sequences: keyed("sequence", self.sequences, |s| &s.name)?,
            synonyms: keyed("synonym", self.synonyms, |s| &s.name)?,
            triggers: keyed("trigger", self.triggers, |t| &t.name)?,
            views: keyed("view", self.views, |v| &v.name)?,
        })
    }
}

impl From<&Schema> for SchemaBuilder {
    fn from(schema: &Schema) -> Self {
        Self {
            tables: schema.tables.values().cloned().collect(),
            packages: schema.packages.values().cloned().collect(),
            procedures: schema.procedures.values().cloned().collect(),
            functions: schema.functions.values().cloned().collect(),
            jobs: schema.jobs.values().cloned().collect(),
            sequences: schema.sequences.values().cloned().collect(),
            synonyms: schema.synonyms.values().cloned().collect(),
            triggers: schema.triggers.values().cloned().collect(),
            views: schema.views.values().cloned().collect(),
        }
    }
}

fn keyed<T>(
    kind: &str,
    items: Vec<T>,
    name_of: impl Fn(&T) -> &String,
) -> Result<BTreeMap<String, T>> {
    let mut map = BTreeMap::new();
    for item in items {
        let name = name_of(&item).clone();
        if map.contains_key(&name) {
            bail!("Duplicate {} name '{}' in schema", kind, name);
        }
        map.insert(name, item);
    }
    Ok(map)
}
