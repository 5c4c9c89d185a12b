use crate::catalog::sequence::Sequence;
use crate::diff::context::DiffContext;
use crate::diff::sequences::{self, SequenceChange};
use crate::render::DdlRenderer;

impl DdlRenderer for Sequence {
    fn create_sql(&self, _ctx: &DiffContext) -> String {
        let mut sql = format!(
            "create sequence {}\nminvalue {}\nmaxvalue {}\nstart with {}\nincrement by {}\n",
            self.name, self.min_value, self.max_value, self.last_number, self.increment_by
        );
        sql.push_str(&render_cache(self.cache_size));
        if self.cycle {
            sql.push_str("cycle\n");
        }
        if self.order {
            sql.push_str("order\n");
        }
        sql.push_str(";\n");
        sql
    }

    fn drop_sql(&self) -> String {
        format!("drop sequence {};\n", self.name)
    }
}

/// ALTER SEQUENCE with only the clauses that changed; empty when nothing did.
pub fn render_alter_sequence(old: &Sequence, new: &Sequence) -> String {
    let changes = sequences::diff(old, new);
    if changes.is_empty() {
        return String::new();
    }

    let mut sql = format!("alter sequence {}\n", old.name);
    for change in changes {
        let clause = match change {
            SequenceChange::MinValue(v) => format!("minvalue {}\n", v),
            SequenceChange::MaxValue(v) => format!("maxvalue {}\n", v),
            SequenceChange::IncrementBy(v) => format!("increment by {}\n", v),
            SequenceChange::Cache(size) => render_cache(size),
            SequenceChange::Cycle(true) => "cycle\n".to_string(),
            SequenceChange::Cycle(false) => "nocycle\n".to_string(),
            SequenceChange::Order(true) => "order\n".to_string(),
            SequenceChange::Order(false) => "noorder\n".to_string(),
        };
        sql.push_str(&clause);
    }
    sql.push_str(";\n");
    sql
}

fn render_cache(size: u32) -> String {
    if size == 0 {
        "nocache\n".to_string()
    } else {
        format!("cache {}\n", size)
    }
}
