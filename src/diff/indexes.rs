use crate::catalog::index::Index;
use crate::catalog::table::Table;

/// Index differences between two versions of a table, matched by index name
#[derive(Debug, Default)]
pub struct IndexChanges<'a> {
    pub added: Vec<&'a Index>,
    pub dropped: Vec<&'a Index>,
    /// (old, new) pairs that must be dropped and recreated
    pub changed: Vec<(&'a Index, &'a Index)>,
}

impl IndexChanges<'_> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.dropped.is_empty() && self.changed.is_empty()
    }
}

pub fn diff<'a>(old: &'a Table, new: &'a Table) -> IndexChanges<'a> {
    let mut changes = IndexChanges::default();

    for new_index in &new.indexes {
        match old.index(&new_index.name) {
            None => changes.added.push(new_index),
            Some(old_index) if !old_index.db_equals(new_index) => {
                changes.changed.push((old_index, new_index))
            }
            Some(_) => {}
        }
    }

    changes.dropped = old
        .indexes
        .iter()
        .filter(|i| new.index(&i.name).is_none())
        .collect();

    changes
}
