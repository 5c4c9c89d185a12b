//! CREATE TABLE with everything that belongs to a fresh table

use itertools::Itertools;

use crate::catalog::table::Table;
use crate::diff::context::DiffContext;
use crate::render::sql::{render_column_definition, render_create_index, render_grant_statement};
use crate::render::{quote_ident, render_column_comment, render_table_comment, tablespace_clause};

/// Table creation script: the table itself, then its comments, indexes and,
/// unless grant changes are ignored, its grants.
pub fn render_create_table(ctx: &DiffContext, table: &Table) -> String {
    let columns = table
        .ordered_columns()
        .into_iter()
        .map(|c| format!("\n  {}", render_column_definition(c)))
        .join(",");

    let mut sql = format!(
        "create table {} ({}\n){};\n",
        quote_ident(&table.name),
        columns,
        tablespace_clause(ctx, &table.tablespace)
    );

    if let Some(comment) = &table.comment {
        sql.push_str(&render_table_comment(&table.name, comment));
    }

    for column in table.ordered_columns() {
        if let Some(comment) = column.comment.as_deref().filter(|c| !c.is_empty()) {
            sql.push_str(&render_column_comment(&table.name, &column.name, comment));
        }
    }

    for index in &table.indexes {
        sql.push_str(&render_create_index(ctx, index, &table.name));
    }

    if !ctx.options.ignore_grant_changes {
        for grant in &table.grants {
            if let Some(statement) = render_grant_statement(ctx, grant, &table.name) {
                sql.push_str(&statement);
            }
        }
    }

    sql
}
