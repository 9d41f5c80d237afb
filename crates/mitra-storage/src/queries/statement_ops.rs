//! Execute arbitrary statements and render their rows.

use mitra_core::errors::{ChainError, MitraResult};
use rusqlite::Connection;

use super::render::{render_rows, repr_value};
use crate::to_storage_err;

/// Execute a read-only `sql`. Row-returning statements render as a list of
/// tuples; statements with no result columns, or no rows, render as `""`.
/// Statements that would write are rejected before they run.
pub fn run(conn: &Connection, sql: &str) -> MitraResult<String> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    if !stmt.readonly() {
        return Err(ChainError::ExecutionFailed {
            query: sql.to_string(),
            reason: "statement would modify the data source".to_string(),
        }
        .into());
    }
    let column_count = stmt.column_count();
    if column_count == 0 {
        stmt.execute([]).map_err(|e| to_storage_err(e.to_string()))?;
        return Ok(String::new());
    }

    let mut rows = stmt.query([]).map_err(|e| to_storage_err(e.to_string()))?;
    let mut rendered: Vec<Vec<String>> = Vec::new();
    while let Some(row) = rows.next().map_err(|e| to_storage_err(e.to_string()))? {
        let mut cells = Vec::with_capacity(column_count);
        for i in 0..column_count {
            let value = row.get_ref(i).map_err(|e| to_storage_err(e.to_string()))?;
            cells.push(repr_value(value));
        }
        rendered.push(cells);
    }
    Ok(render_rows(&rendered))
}

/// Result column names as SQLite reports them.
pub fn column_names(conn: &Connection, sql: &str) -> MitraResult<Vec<String>> {
    let stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    Ok(stmt.column_names().into_iter().map(String::from).collect())
}
