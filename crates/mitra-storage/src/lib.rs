//! # mitra-storage
//!
//! SQLite-backed data source for the chain invoker and the prediction engine.
//!
//! - `SqliteDataSource::load_table` replaces a table from in-memory rows.
//! - `run` executes a read-only statement and renders rows as a list of tuples.
//! - `table_info` describes every table with its DDL and a few sample rows.
//! - `SqliteActivityReader` reads activity records for the prediction engine.

pub mod activity;
pub mod data_source;
pub mod pool;
pub mod queries;
pub mod table;

pub use activity::{ActivityColumns, SqliteActivityReader};
pub use data_source::SqliteDataSource;
pub use table::{CellValue, ColumnKind, ColumnSpec, TableData};

use mitra_core::errors::{MitraError, StorageError};

/// Wrap a SQLite failure message in the workspace error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> MitraError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
