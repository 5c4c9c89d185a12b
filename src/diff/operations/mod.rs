//! Object-level changes emitted by a schema comparison

use anyhow::Result;
use std::fmt;

use crate::diff::context::DiffContext;

pub use object::*;

pub mod object;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Create,
    Update,
    Drop,
}

impl Operation {
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Drop => "drop",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Object categories, in the order a comparison walks them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectKind {
    Table,
    PublicSynonym,
    Package,
    Procedure,
    Function,
    Job,
    Sequence,
    Trigger,
    Synonym,
    View,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 10] = [
        ObjectKind::Table,
        ObjectKind::PublicSynonym,
        ObjectKind::Package,
        ObjectKind::Procedure,
        ObjectKind::Function,
        ObjectKind::Job,
        ObjectKind::Sequence,
        ObjectKind::Trigger,
        ObjectKind::Synonym,
        ObjectKind::View,
    ];

    /// Lowercase tag used in file names and summaries
    pub fn tag(&self) -> &'static str {
        match self {
            ObjectKind::Table => "table",
            ObjectKind::PublicSynonym => "public_synonym",
            ObjectKind::Package => "package",
            ObjectKind::Procedure => "procedure",
            ObjectKind::Function => "function",
            ObjectKind::Job => "job",
            ObjectKind::Sequence => "sequence",
            ObjectKind::Trigger => "trigger",
            ObjectKind::Synonym => "synonym",
            ObjectKind::View => "view",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One notification of the comparison stream
#[derive(Debug, Clone)]
pub struct Change<'a> {
    pub operation: Operation,
    pub kind: ObjectKind,
    pub name: String,
    pub diff: ObjectDiff<'a>,
}

impl<'a> Change<'a> {
    pub fn created(object: SchemaObject<'a>) -> Self {
        Self::new(Operation::Create, object.kind(), ObjectDiff::created(object))
    }

    pub fn updated(source: SchemaObject<'a>, destination: SchemaObject<'a>) -> Self {
        Self::new(
            Operation::Update,
            source.kind(),
            ObjectDiff::updated(source, destination),
        )
    }

    pub fn dropped(object: SchemaObject<'a>) -> Self {
        Self::new(Operation::Drop, object.kind(), ObjectDiff::dropped(object))
    }

    fn new(operation: Operation, kind: ObjectKind, diff: ObjectDiff<'a>) -> Self {
        Self {
            operation,
            kind,
            name: diff.name().to_string(),
            diff,
        }
    }

    pub fn to_sql(&self, ctx: &DiffContext) -> Result<String> {
        self.diff.to_sql(ctx)
    }
}
