use crate::catalog::sequence::Sequence;

/// One clause of an ALTER SEQUENCE, carrying the new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceChange {
    MinValue(String),
    MaxValue(String),
    IncrementBy(String),
    Cache(u32),
    Cycle(bool),
    Order(bool),
}

/// Clauses that differ between two versions of a sequence, in ALTER order
pub fn diff(old: &Sequence, new: &Sequence) -> Vec<SequenceChange> {
    let mut changes = Vec::new();
    if old.min_value != new.min_value {
        changes.push(SequenceChange::MinValue(new.min_value.clone()));
    }
    if old.max_value != new.max_value {
        changes.push(SequenceChange::MaxValue(new.max_value.clone()));
    }
    if old.increment_by != new.increment_by {
        changes.push(SequenceChange::IncrementBy(new.increment_by.clone()));
    }
    if old.cache_size != new.cache_size {
        changes.push(SequenceChange::Cache(new.cache_size));
    }
    if old.cycle != new.cycle {
        changes.push(SequenceChange::Cycle(new.cycle));
    }
    if old.order != new.order {
        changes.push(SequenceChange::Order(new.order));
    }
    changes
}
