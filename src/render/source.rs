use crate::catalog::source::{Package, Source};
use crate::diff::context::DiffContext;
use crate::render::{DdlRenderer, render_source_lines};

/// `CREATE OR REPLACE <stored lines>/`
fn render_create_or_replace(lines: &[String]) -> String {
    format!("CREATE OR REPLACE {}/\n", render_source_lines(lines))
}

/// Procedures and functions share one shape; only their DROP differs.
pub fn render_create_source(source: &Source) -> String {
    render_create_or_replace(&source.body)
}

pub fn render_drop_source(object_type: &str, source: &Source) -> String {
    format!("drop {} {};\n", object_type, source.name)
}

impl DdlRenderer for Package {
    /// Specification first, then the body
    fn create_sql(&self, _ctx: &DiffContext) -> String {
        let mut sql = render_create_or_replace(&self.declaration);
        sql.push_str(&render_create_or_replace(&self.body));
        sql
    }

    fn drop_sql(&self) -> String {
        format!("drop package {};\n", self.name)
    }
}
