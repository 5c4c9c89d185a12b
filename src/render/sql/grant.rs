use crate::catalog::grant::Grant;
use crate::diff::context::DiffContext;
use crate::substitution::USERS_ROLES;

/// `GRANT <privileges> ON <table> to <grantee>;`, or nothing when no privilege is held.
///
/// The grantee goes through the `usersroles` substitution table.
pub fn render_grant_statement(ctx: &DiffContext, grant: &Grant, table_name: &str) -> Option<String> {
    let privileges = grant.privileges();
    if privileges.is_empty() {
        return None;
    }

    Some(format!(
        "GRANT {} ON {} to {};\n",
        privileges.join(", "),
        table_name,
        ctx.substitutions.substitute(USERS_ROLES, &grant.grantee)
    ))
}
