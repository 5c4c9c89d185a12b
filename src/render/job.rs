use crate::catalog::job::Job;
use crate::diff::context::DiffContext;
use crate::render::{DdlRenderer, escape_string};

const DATE_FORMAT: &str = "'dd-mm-yyyy hh24:mi:ss'";

impl DdlRenderer for Job {
    fn create_sql(&self, _ctx: &DiffContext) -> String {
        let mut sql = format!(
            "begin\n  sys.dbms_job.submit(job => {},\n    what => {},\n    next_date => to_date('{}', {}),\n    interval => {});\n",
            self.name,
            escape_string(&self.what),
            self.next_date,
            DATE_FORMAT,
            escape_string(&self.interval)
        );
        if self.broken {
            sql.push_str(&format!(
                "  sys.dbms_job.broken(job => {},\n    broken => true,\n    next_date => to_date('{}', {}));\n",
                self.name, self.next_date, DATE_FORMAT
            ));
        }
        sql.push_str("  commit;\nend;\n/\n");
        sql
    }

    fn drop_sql(&self) -> String {
        format!(
            "begin\n  sys.dbms_job.remove({});\n  commit;\nend;\n/\n",
            self.name
        )
    }
}
