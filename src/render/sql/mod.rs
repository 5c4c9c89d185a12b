//! Statement fragments shared by table creation and table alteration

pub mod column;
pub mod grant;
pub mod index;
pub mod table;

pub use column::{render_column_definition, render_column_type};
pub use grant::render_grant_statement;
pub use index::{render_create_index, render_drop_index};
pub use table::render_create_table;
