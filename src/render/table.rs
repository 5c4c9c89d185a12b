//! Table scripts: creation, removal and in-place alteration

use itertools::Itertools;

use crate::catalog::synonym::PublicSynonym;
use crate::catalog::table::{Column, Table};
use crate::diff::context::DiffContext;
use crate::diff::tables::TableChanges;
use crate::render::sql::{
    render_column_definition, render_create_index, render_create_table, render_drop_index,
};
use crate::render::{DdlRenderer, quote_ident, render_column_comment};

impl DdlRenderer for Table {
    fn create_sql(&self, ctx: &DiffContext) -> String {
        render_create_table(ctx, self)
    }

    fn drop_sql(&self) -> String {
        format!("drop table {};\n", self.name)
    }
}

impl DdlRenderer for PublicSynonym {
    fn create_sql(&self, _ctx: &DiffContext) -> String {
        format!("create public synonym {} for {};\n", self.name, self.table_name)
    }

    fn drop_sql(&self) -> String {
        format!("drop public synonym {};\n", self.name)
    }
}

/// Statements turning `old` into `new`; empty when the tables are equal.
///
/// Every statement addresses the table by its old name. A rename, if any,
/// comes last.
pub fn render_table_update(ctx: &DiffContext, old: &Table, new: &Table) -> String {
    let changes = TableChanges::between(ctx, old, new);
    let table = old.name.as_str();
    let mut sql = String::new();

    if !changes.columns.added.is_empty() {
        sql.push_str(&render_column_list("add", table, &changes.columns.added));
        for column in &changes.columns.added {
            if let Some(comment) = column.comment.as_deref().filter(|c| !c.is_empty()) {
                sql.push_str(&render_column_comment(table, &column.name, comment));
            }
        }
    }

    for column in &changes.columns.dropped {
        sql.push_str(&format!(
            "alter table {} drop column {};\n",
            quote_ident(table),
            quote_ident(&column.name)
        ));
    }

    if !changes.columns.modified.is_empty() {
        sql.push_str(&render_column_list("modify", table, &changes.columns.modified));
    }
    for column in &changes.columns.comment_changed {
        let comment = column.comment.as_deref().unwrap_or("");
        sql.push_str(&render_column_comment(table, &column.name, comment));
    }

    for index in &changes.indexes.added {
        sql.push_str(&render_create_index(ctx, index, table));
    }
    for index in &changes.indexes.dropped {
        sql.push_str(&render_drop_index(index));
    }
    for (old_index, new_index) in &changes.indexes.changed {
        sql.push_str(&render_drop_index(old_index));
        sql.push_str(&render_create_index(ctx, new_index, table));
    }

    if changes.is_renamed() {
        sql.push_str(&format!("ALTER TABLE {} RENAME TO {};", old.name, new.name));
    }

    sql
}

fn render_column_list(action: &str, table: &str, columns: &[&Column]) -> String {
    let definitions = columns
        .iter()
        .map(|c| format!("\n  {}", render_column_definition(c)))
        .join(",");
    format!("alter table {} {} ({}\n);\n", quote_ident(table), action, definitions)
}
