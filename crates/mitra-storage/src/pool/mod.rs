//! Connection management.

pub mod pragmas;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use mitra_core::errors::MitraResult;
use rusqlite::Connection;

use crate::to_storage_err;

/// A single SQLite connection guarded for shared use across threads.
pub struct DataConnection {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl DataConnection {
    /// Open a connection to the given database file, creating it if needed.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> MitraResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> MitraResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_memory_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path: None,
        })
    }

    /// Execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> MitraResult<T>
    where
        F: FnOnce(&Connection) -> MitraResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&guard)
    }

    /// Execute a closure with mutable access (transactions).
    pub fn with_conn_mut<F, T>(&self, f: F) -> MitraResult<T>
    where
        F: FnOnce(&mut Connection) -> MitraResult<T>,
    {
        let mut guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&mut guard)
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }
}
