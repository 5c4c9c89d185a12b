use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::triggers::Trigger;
use crate::diff::context::DiffContext;
use crate::render::DdlRenderer;

static QUOTED_QUALIFIED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""[A-Za-z0-9_]+"\."([A-Za-z0-9_]+)""#).expect("valid quoted name pattern")
});
static QUALIFIED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9_]+\.([A-Za-z0-9_]+)").expect("valid qualified name pattern")
});

/// Strip owner qualification: `"APP"."TRG_X"` and `APP.TRG_X` both become `TRG_X`.
pub fn sanitize_description(description: &str) -> String {
    let unquoted = QUOTED_QUALIFIED.replace_all(description, "$1");
    QUALIFIED.replace_all(&unquoted, "$1").into_owned()
}

impl DdlRenderer for Trigger {
    fn create_sql(&self, _ctx: &DiffContext) -> String {
        format!(
            "CREATE OR REPLACE TRIGGER {}\n{}\n/\n",
            sanitize_description(self.description.trim_end()),
            self.body.trim_end()
        )
    }

    fn drop_sql(&self) -> String {
        format!("drop trigger {};\n", self.name)
    }
}
