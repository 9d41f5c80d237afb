//! Raw SQL operations, each taking a `&Connection`.

pub mod activity_ops;
pub mod render;
pub mod schema_ops;
pub mod statement_ops;
pub mod table_ops;

/// Quote an identifier for use in generated SQL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
