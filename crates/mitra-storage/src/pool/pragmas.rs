//! PRAGMA configuration applied on open.
//!
//! WAL mode, NORMAL sync, configurable busy_timeout.

use mitra_core::errors::MitraResult;
use rusqlite::Connection;

use crate::to_storage_err;

/// Apply pragmas to a file-backed connection.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> MitraResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {busy_timeout_ms};
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// In-memory databases have no journal file; only the sync level applies.
pub fn apply_memory_pragmas(conn: &Connection) -> MitraResult<()> {
    conn.execute_batch("PRAGMA synchronous = NORMAL;")
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> MitraResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
