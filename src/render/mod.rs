pub mod job;
pub mod sequence;
pub mod source;
pub mod sql;
pub mod synonym;
pub mod table;
pub mod trigger;
pub mod view;

use crate::diff::context::DiffContext;
use crate::substitution::TABLESPACES;

/// DDL text for creating and dropping one schema object
pub trait DdlRenderer {
    fn create_sql(&self, ctx: &DiffContext) -> String;
    fn drop_sql(&self) -> String;
}

pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Oracle string literal, with embedded quotes doubled
pub fn escape_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// `\ntablespace <ts>` when tablespaces are rendered, otherwise empty
pub fn tablespace_clause(ctx: &DiffContext, tablespace: &str) -> String {
    if !ctx.options.with_tablespace || tablespace.is_empty() {
        return String::new();
    }
    format!(
        "\ntablespace {}",
        ctx.substitutions.substitute(TABLESPACES, tablespace)
    )
}

pub fn render_table_comment(table: &str, comment: &str) -> String {
    format!("comment on table {}\n  is {};\n", table, escape_string(comment))
}

pub fn render_column_comment(table: &str, column: &str, comment: &str) -> String {
    format!(
        "comment on column {}.{}\n  is {};\n",
        table,
        column,
        escape_string(comment)
    )
}

/// Join stored source lines, making sure each one ends with a newline.
pub fn render_source_lines(lines: &[String]) -> String {
    let mut sql = String::new();
    for line in lines {
        sql.push_str(line);
        if !line.ends_with('\n') {
            sql.push('\n');
        }
    }
    sql
}
