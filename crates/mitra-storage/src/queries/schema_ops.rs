//! Schema description: DDL plus sample rows per table.

use mitra_core::errors::MitraResult;
use rusqlite::Connection;

use super::quote_ident;
use super::render::plain_value;
use crate::to_storage_err;

/// User tables, sorted by name.
pub fn table_names(conn: &Connection) -> MitraResult<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(names)
}

fn create_sql(conn: &Connection, table: &str) -> MitraResult<String> {
    conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get::<_, String>(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn sample_rows(conn: &Connection, table: &str, limit: usize) -> MitraResult<(Vec<String>, Vec<String>)> {
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM {} LIMIT {limit}", quote_ident(table)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let column_count = columns.len();
    let mut rows = stmt.query([]).map_err(|e| to_storage_err(e.to_string()))?;
    let mut lines = Vec::new();
    while let Some(row) = rows.next().map_err(|e| to_storage_err(e.to_string()))? {
        let mut cells = Vec::with_capacity(column_count);
        for i in 0..column_count {
            let value = row.get_ref(i).map_err(|e| to_storage_err(e.to_string()))?;
            cells.push(plain_value(value));
        }
        lines.push(cells.join("\t"));
    }
    Ok((columns, lines))
}

/// Describe one table: its DDL, then a comment block with up to
/// `sample_rows_limit` rows, tab separated.
pub fn describe_table(conn: &Connection, table: &str, sample_rows_limit: usize) -> MitraResult<String> {
    let ddl = create_sql(conn, table)?;
    if sample_rows_limit == 0 {
        return Ok(format!("\n{ddl}"));
    }
    let (columns, rows) = sample_rows(conn, table, sample_rows_limit)?;
    Ok(format!(
        "\n{ddl}\n\n/*\n{sample_rows_limit} rows from {table} table:\n{}\n{}\n*/",
        columns.join("\t"),
        rows.join("\n")
    ))
}

/// Describe every user table, separated by blank lines.
pub fn table_info(conn: &Connection, sample_rows_limit: usize) -> MitraResult<String> {
    let mut sections = Vec::new();
    for table in table_names(conn)? {
        sections.push(describe_table(conn, &table, sample_rows_limit)?);
    }
    Ok(sections.join("\n\n"))
}
