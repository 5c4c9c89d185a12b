use crate::catalog::table::Column;
use crate::render::quote_ident;
use tracing::warn;

/// Oracle type with its size arguments. Unsupported types render as `UNKNOWN`.
pub fn render_column_type(column: &Column) -> String {
    match column.data_type.as_str() {
        "NUMBER" => {
            if column.precision == 0 {
                "NUMBER".to_string()
            } else if column.scale == 0 {
                format!("NUMBER({})", column.precision)
            } else {
                format!("NUMBER({}, {})", column.precision, column.scale)
            }
        }
        "CHAR" => format!("CHAR({})", column.length),
        "VARCHAR2" => format!("VARCHAR2({})", column.length),
        "DATE" => "DATE".to_string(),
        "LONG" => "LONG".to_string(),
        "ROWID" => "ROWID".to_string(),
        "RAW" => format!("RAW({})", column.length),
        "LONG RAW" => "LONG RAW".to_string(),
        other => {
            warn!(
                "Unsupported data type '{}' for column {}, rendering as UNKNOWN",
                other, column.name
            );
            "UNKNOWN".to_string()
        }
    }
}

/// `"NAME" TYPE[ not null][ default expr]`
pub fn render_column_definition(column: &Column) -> String {
    let mut sql = format!("{} {}", quote_ident(&column.name), render_column_type(column));
    if !column.nullable {
        sql.push_str(" not null");
    }
    let default = column.default_expression();
    if !default.is_empty() {
        sql.push_str(" default ");
        sql.push_str(default);
    }
    sql
}
