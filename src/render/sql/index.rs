use crate::catalog::index::Index;
use crate::diff::context::DiffContext;
use crate::render::tablespace_clause;

/// `create [unique] [bitmap] index NAME on TABLE\n(cols)[tablespace];`
///
/// The table is passed separately so statements can address a table under
/// the name it has before a pending rename.
pub fn render_create_index(ctx: &DiffContext, index: &Index, table_name: &str) -> String {
    let mut sql = String::from("create");
    if index.unique {
        sql.push_str(" unique");
    }
    if index.is_bitmap() {
        sql.push_str(" bitmap");
    }

    let mut columns: Vec<_> = index.columns.iter().collect();
    columns.sort_by_key(|c| c.position);
    let column_list = columns
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    sql.push_str(&format!(
        " index {} on {}\n({}){};\n",
        index.name,
        table_name,
        column_list,
        tablespace_clause(ctx, &index.tablespace)
    ));
    sql
}

pub fn render_drop_index(index: &Index) -> String {
    format!("drop index {};\n", index.name)
}
