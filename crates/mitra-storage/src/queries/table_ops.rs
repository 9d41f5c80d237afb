//! Replace a table from in-memory rows.

use mitra_core::errors::{MitraResult, StorageError};
use rusqlite::{params_from_iter, Connection};

use super::quote_ident;
use crate::table::TableData;
use crate::to_storage_err;

/// DDL for `table`, one column per line.
pub fn create_table_sql(table: &TableData) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|c| format!("\t{} {}", quote_ident(&c.name), c.kind.sql_type()))
        .collect();
    format!(
        "CREATE TABLE {} (\n{}\n)",
        quote_ident(&table.name),
        columns.join(", \n")
    )
}

fn validate(table: &TableData) -> MitraResult<()> {
    let fail = |reason: String| -> mitra_core::MitraError {
        StorageError::TableLoadFailed {
            table: table.name.clone(),
            reason,
        }
        .into()
    };
    if table.name.trim().is_empty() {
        return Err(fail("table name is empty".into()));
    }
    if table.columns.is_empty() {
        return Err(fail("table has no columns".into()));
    }
    for (i, row) in table.rows.iter().enumerate() {
        if row.len() != table.columns.len() {
            return Err(fail(format!(
                "row {i} has {} cells, expected {}",
                row.len(),
                table.columns.len()
            )));
        }
    }
    Ok(())
}

/// Drop and recreate `table`, inserting every row in one transaction.
/// Returns the number of rows inserted.
pub fn load_table(conn: &mut Connection, table: &TableData) -> MitraResult<usize> {
    validate(table)?;

    let tx = conn.transaction().map_err(|e| to_storage_err(e.to_string()))?;
    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS {};\n{};",
        quote_ident(&table.name),
        create_table_sql(table)
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;

    let placeholders = vec!["?"; table.columns.len()].join(", ");
    let insert = format!(
        "INSERT INTO {} VALUES ({placeholders})",
        quote_ident(&table.name)
    );
    {
        let mut stmt = tx.prepare(&insert).map_err(|e| to_storage_err(e.to_string()))?;
        for row in &table.rows {
            stmt.execute(params_from_iter(row.iter()))
                .map_err(|e| to_storage_err(e.to_string()))?;
        }
    }
    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;

    tracing::debug!(
        table = %table.name,
        columns = table.columns.len(),
        rows = table.rows.len(),
        "table loaded"
    );
    Ok(table.rows.len())
}
