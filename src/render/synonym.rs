use crate::catalog::synonym::Synonym;
use crate::diff::context::DiffContext;
use crate::render::DdlRenderer;

impl DdlRenderer for Synonym {
    fn create_sql(&self, _ctx: &DiffContext) -> String {
        format!(
            "create synonym {} for {}.{};\n",
            self.name, self.table_owner, self.table_name
        )
    }

    fn drop_sql(&self) -> String {
        format!("drop synonym {};\n", self.name)
    }
}
