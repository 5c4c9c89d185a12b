//! Table matching across environments and table-level change detection

use std::collections::BTreeMap;

use crate::catalog::table::Table;
use crate::diff::context::DiffContext;
use crate::diff::{CategoryDiff, columns, indexes};
use crate::render::table::render_table_update;

/// Everything that differs between two matched tables
#[derive(Debug)]
pub struct TableChanges<'a> {
    pub old: &'a Table,
    pub new: &'a Table,
    pub columns: columns::ColumnChanges<'a>,
    pub indexes: indexes::IndexChanges<'a>,
}

impl<'a> TableChanges<'a> {
    pub fn between(ctx: &DiffContext, old: &'a Table, new: &'a Table) -> Self {
        Self {
            old,
            new,
            columns: columns::diff(&ctx.options, old, new),
            indexes: indexes::diff(old, new),
        }
    }

    pub fn is_renamed(&self) -> bool {
        self.old.name != self.new.name
    }
}

/// Tables are unchanged when their update script is empty.
pub fn tables_equal(ctx: &DiffContext, old: &Table, new: &Table) -> bool {
    render_table_update(ctx, old, new).is_empty()
}

/// Tables are matched by exact name first, then through the equivalence groups.
///
/// Only tables without an exact-name partner on the other side take part in
/// equivalence matching. Every such pair that is not equal is reported as
/// changed, so one table may show up in several pairs when the groups are
/// ambiguous.
pub fn diff<'a>(
    ctx: &DiffContext,
    old: &'a BTreeMap<String, Table>,
    new: &'a BTreeMap<String, Table>,
) -> CategoryDiff<'a, Table> {
    let mut changed = Vec::new();
    for new_table in new.values() {
        if let Some(old_table) = old.get(&new_table.name) {
            if !tables_equal(ctx, old_table, new_table) {
                changed.push((old_table, new_table));
            }
            continue;
        }
        for old_table in orphans(old, new) {
            if ctx.equivalences.matches(&old_table.name, &new_table.name)
                && !tables_equal(ctx, old_table, new_table)
            {
                changed.push((old_table, new_table));
            }
        }
    }
    changed.sort_by(|a, b| (&a.0.name, &a.1.name).cmp(&(&b.0.name, &b.1.name)));

    CategoryDiff {
        new: unmatched(ctx, new, old),
        removed: unmatched(ctx, old, new),
        changed,
    }
}

/// Tables of `from` whose exact name is absent from `to`
fn orphans<'a, 'b>(
    from: &'a BTreeMap<String, Table>,
    to: &'b BTreeMap<String, Table>,
) -> impl Iterator<Item = &'a Table> {
    from.values().filter(move |t| !to.contains_key(&t.name))
}

/// Tables of `from` with neither an exact-name nor an equivalent partner in `to`
fn unmatched<'a>(
    ctx: &DiffContext,
    from: &'a BTreeMap<String, Table>,
    to: &BTreeMap<String, Table>,
) -> Vec<&'a Table> {
    orphans(from, to)
        .filter(|t| {
            !orphans(to, from).any(|other| ctx.equivalences.matches(&other.name, &t.name))
        })
        .collect()
}
