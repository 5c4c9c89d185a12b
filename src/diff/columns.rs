use crate::catalog::table::{Column, Table};
use crate::catalog::utils::trim_lines;
use crate::diff::context::DiffOptions;

/// Column-level differences between two versions of a table.
///
/// Columns are matched by exact name. `modified` and `comment_changed` hold the
/// destination side of each pair.
#[derive(Debug, Default)]
pub struct ColumnChanges<'a> {
    pub added: Vec<&'a Column>,
    pub dropped: Vec<&'a Column>,
    pub modified: Vec<&'a Column>,
    pub comment_changed: Vec<&'a Column>,
}

impl ColumnChanges<'_> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.dropped.is_empty()
            && self.modified.is_empty()
            && self.comment_changed.is_empty()
    }
}

pub fn diff<'a>(options: &DiffOptions, old: &'a Table, new: &'a Table) -> ColumnChanges<'a> {
    let mut changes = ColumnChanges::default();

    for new_col in new.ordered_columns() {
        match old.column(&new_col.name) {
            None => changes.added.push(new_col),
            Some(old_col) => {
                if !old_col.db_equals(new_col) {
                    changes.modified.push(new_col);
                }
                if !options.ignore_object_comments && comment_differs(old_col, new_col) {
                    changes.comment_changed.push(new_col);
                }
            }
        }
    }

    for old_col in old.ordered_columns() {
        if new.column(&old_col.name).is_none() {
            changes.dropped.push(old_col);
        }
    }

    changes
}

fn comment_differs(old: &Column, new: &Column) -> bool {
    trim_lines(old.comment.as_deref().unwrap_or(""))
        != trim_lines(new.comment.as_deref().unwrap_or(""))
}
