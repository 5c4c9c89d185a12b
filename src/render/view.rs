use crate::catalog::view::View;
use crate::diff::context::DiffContext;
use crate::render::DdlRenderer;

impl DdlRenderer for View {
    fn create_sql(&self, _ctx: &DiffContext) -> String {
        format!(
            "CREATE OR REPLACE VIEW {}\n({})\n AS\n{}\n/\n",
            self.name,
            self.columns.join(", "),
            self.source
        )
    }

    fn drop_sql(&self) -> String {
        format!("drop view {};\n", self.name)
    }
}
