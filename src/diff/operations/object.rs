//! Kind-tagged references to schema objects and their rendering dispatch

use anyhow::{Result, bail};

use super::ObjectKind;
use crate::catalog::job::Job;
use crate::catalog::sequence::Sequence;
use crate::catalog::source::{Package, Source};
use crate::catalog::synonym::{PublicSynonym, Synonym};
use crate::catalog::table::Table;
use crate::catalog::triggers::Trigger;
use crate::catalog::view::View;
use crate::diff::context::DiffContext;
use crate::render::DdlRenderer;
use crate::render::sequence::render_alter_sequence;
use crate::render::source::{render_create_source, render_drop_source};
use crate::render::table::render_table_update;

#[derive(Debug, Clone, Copy)]
pub enum SchemaObject<'a> {
    Table(&'a Table),
    PublicSynonym(&'a PublicSynonym),
    Package(&'a Package),
    Procedure(&'a Source),
    Function(&'a Source),
    Job(&'a Job),
    Sequence(&'a Sequence),
    Trigger(&'a Trigger),
    Synonym(&'a Synonym),
    View(&'a View),
}

impl<'a> SchemaObject<'a> {
    pub fn kind(&self) -> ObjectKind {
        match self {
            SchemaObject::Table(_) => ObjectKind::Table,
            SchemaObject::PublicSynonym(_) => ObjectKind::PublicSynonym,
            SchemaObject::Package(_) => ObjectKind::Package,
            SchemaObject::Procedure(_) => ObjectKind::Procedure,
            SchemaObject::Function(_) => ObjectKind::Function,
            SchemaObject::Job(_) => ObjectKind::Job,
            SchemaObject::Sequence(_) => ObjectKind::Sequence,
            SchemaObject::Trigger(_) => ObjectKind::Trigger,
            SchemaObject::Synonym(_) => ObjectKind::Synonym,
            SchemaObject::View(_) => ObjectKind::View,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            SchemaObject::Table(o) => &o.name,
            SchemaObject::PublicSynonym(o) => &o.name,
            SchemaObject::Package(o) => &o.name,
            SchemaObject::Procedure(o) | SchemaObject::Function(o) => &o.name,
            SchemaObject::Job(o) => &o.name,
            SchemaObject::Sequence(o) => &o.name,
            SchemaObject::Trigger(o) => &o.name,
            SchemaObject::Synonym(o) => &o.name,
            SchemaObject::View(o) => &o.name,
        }
    }

    pub fn create_sql(&self, ctx: &DiffContext) -> String {
        match self {
            SchemaObject::Table(o) => o.create_sql(ctx),
            SchemaObject::PublicSynonym(o) => o.create_sql(ctx),
            SchemaObject::Package(o) => o.create_sql(ctx),
            SchemaObject::Procedure(o) | SchemaObject::Function(o) => render_create_source(o),
            SchemaObject::Job(o) => o.create_sql(ctx),
            SchemaObject::Sequence(o) => o.create_sql(ctx),
            SchemaObject::Trigger(o) => o.create_sql(ctx),
            SchemaObject::Synonym(o) => o.create_sql(ctx),
            SchemaObject::View(o) => o.create_sql(ctx),
        }
    }

    pub fn drop_sql(&self) -> String {
        match self {
            SchemaObject::Table(o) => o.drop_sql(),
            SchemaObject::PublicSynonym(o) => o.drop_sql(),
            SchemaObject::Package(o) => o.drop_sql(),
            SchemaObject::Procedure(o) => render_drop_source("procedure", o),
            SchemaObject::Function(o) => render_drop_source("function", o),
            SchemaObject::Job(o) => o.drop_sql(),
            SchemaObject::Sequence(o) => o.drop_sql(),
            SchemaObject::Trigger(o) => o.drop_sql(),
            SchemaObject::Synonym(o) => o.drop_sql(),
            SchemaObject::View(o) => o.drop_sql(),
        }
    }

    /// Statements turning `self` into `target`.
    ///
    /// Tables and sequences are altered in place; every other kind is replaced
    /// by the full definition of `target`. Mixing kinds is an error.
    pub fn update_sql(&self, ctx: &DiffContext, target: &SchemaObject<'_>) -> Result<String> {
        match (self, target) {
            (SchemaObject::Table(old), SchemaObject::Table(new)) => {
                Ok(render_table_update(ctx, old, new))
            }
            (SchemaObject::Sequence(old), SchemaObject::Sequence(new)) => {
                Ok(render_alter_sequence(old, new))
            }
            (SchemaObject::PublicSynonym(_), SchemaObject::PublicSynonym(_))
            | (SchemaObject::Package(_), SchemaObject::Package(_))
            | (SchemaObject::Procedure(_), SchemaObject::Procedure(_))
            | (SchemaObject::Function(_), SchemaObject::Function(_))
            | (SchemaObject::Job(_), SchemaObject::Job(_))
            | (SchemaObject::Trigger(_), SchemaObject::Trigger(_))
            | (SchemaObject::Synonym(_), SchemaObject::Synonym(_))
            | (SchemaObject::View(_), SchemaObject::View(_)) => Ok(target.create_sql(ctx)),
            (old, new) => bail!(
                "Cannot update {} {} into {} {}",
                old.kind(),
                old.name(),
                new.kind(),
                new.name()
            ),
        }
    }
}

/// The two sides of one object-level change
#[derive(Debug, Clone, Copy)]
pub struct ObjectDiff<'a> {
    pub source: Option<SchemaObject<'a>>,
    pub destination: Option<SchemaObject<'a>>,
}

impl<'a> ObjectDiff<'a> {
    pub fn created(object: SchemaObject<'a>) -> Self {
        Self {
            source: None,
            destination: Some(object),
        }
    }

    pub fn dropped(object: SchemaObject<'a>) -> Self {
        Self {
            source: Some(object),
            destination: None,
        }
    }

    pub fn updated(source: SchemaObject<'a>, destination: SchemaObject<'a>) -> Self {
        Self {
            source: Some(source),
            destination: Some(destination),
        }
    }

    /// Source name when there is one, destination name otherwise
    pub fn name(&self) -> &'a str {
        self.source
            .or(self.destination)
            .map(|o| o.name())
            .unwrap_or_default()
    }

    pub fn to_sql(&self, ctx: &DiffContext) -> Result<String> {
        match (&self.source, &self.destination) {
            (None, Some(new)) => Ok(new.create_sql(ctx)),
            (Some(old), None) => Ok(old.drop_sql()),
            (Some(old), Some(new)) => old.update_sql(ctx, new),
            (None, None) => bail!("Empty diff has no SQL"),
        }
    }
}
