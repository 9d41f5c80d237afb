//! SqliteDataSource: the queryable data source behind the chain invoker.

use std::path::Path;

use mitra_core::config::StorageConfig;
use mitra_core::errors::MitraResult;
use mitra_core::traits::IQueryExecutor;

use crate::pool::DataConnection;
use crate::queries::{schema_ops, statement_ops, table_ops};
use crate::table::TableData;

/// SQLite database holding the tables the query model may read.
pub struct SqliteDataSource {
    conn: DataConnection,
    sample_rows_in_table_info: usize,
}

impl SqliteDataSource {
    /// Open a database file with default settings.
    pub fn open(path: &Path) -> MitraResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> MitraResult<Self> {
        Ok(Self {
            conn: DataConnection::open(path, config.busy_timeout_ms)?,
            sample_rows_in_table_info: config.sample_rows_in_table_info,
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> MitraResult<Self> {
        Ok(Self {
            conn: DataConnection::open_in_memory()?,
            sample_rows_in_table_info: StorageConfig::default().sample_rows_in_table_info,
        })
    }

    /// Override how many sample rows `table_info` shows per table.
    pub fn with_sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows_in_table_info = rows;
        self
    }

    pub fn connection(&self) -> &DataConnection {
        &self.conn
    }

    /// Drop and recreate a table from `table`. Returns rows inserted.
    pub fn load_table(&self, table: &TableData) -> MitraResult<usize> {
        self.conn
            .with_conn_mut(|conn| table_ops::load_table(conn, table))
    }

    /// Load several tables in order.
    pub fn load_tables(&self, tables: &[TableData]) -> MitraResult<usize> {
        let mut total = 0;
        for table in tables {
            total += self.load_table(table)?;
        }
        Ok(total)
    }

    pub fn run(&self, query: &str) -> MitraResult<String> {
        self.conn.with_conn(|conn| statement_ops::run(conn, query))
    }

    pub fn table_names(&self) -> MitraResult<Vec<String>> {
        self.conn.with_conn(schema_ops::table_names)
    }

    pub fn table_info(&self) -> MitraResult<String> {
        let rows = self.sample_rows_in_table_info;
        self.conn.with_conn(|conn| schema_ops::table_info(conn, rows))
    }

    /// Result column names SQLite reports for `query`, without running it.
    pub fn column_names(&self, query: &str) -> MitraResult<Vec<String>> {
        self.conn.with_conn(|conn| statement_ops::column_names(conn, query))
    }
}

impl IQueryExecutor for SqliteDataSource {
    fn run(&self, query: &str) -> MitraResult<String> {
        SqliteDataSource::run(self, query)
    }

    fn table_info(&self) -> MitraResult<String> {
        SqliteDataSource::table_info(self)
    }
}
