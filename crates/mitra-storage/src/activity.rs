//! SqliteActivityReader: activity records for the prediction engine.

use std::sync::Arc;

use mitra_core::errors::MitraResult;
use mitra_core::models::ActivityRecord;
use mitra_core::traits::IActivityReader;
use serde::{Deserialize, Serialize};

use crate::data_source::SqliteDataSource;
use crate::queries::activity_ops;

/// Where activity lives: one row per observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityColumns {
    pub table: String,
    pub entity_column: String,
    pub timestamp_column: String,
    pub value_column: String,
}

impl ActivityColumns {
    pub fn new(
        table: impl Into<String>,
        entity_column: impl Into<String>,
        timestamp_column: impl Into<String>,
        value_column: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            entity_column: entity_column.into(),
            timestamp_column: timestamp_column.into(),
            value_column: value_column.into(),
        }
    }
}

/// Reads activity from a table in a shared data source.
pub struct SqliteActivityReader {
    source: Arc<SqliteDataSource>,
    columns: ActivityColumns,
}

impl SqliteActivityReader {
    pub fn new(source: Arc<SqliteDataSource>, columns: ActivityColumns) -> Self {
        Self { source, columns }
    }

    pub fn columns(&self) -> &ActivityColumns {
        &self.columns
    }
}

impl IActivityReader for SqliteActivityReader {
    fn read_activity(&self, entity_id: &str) -> MitraResult<Vec<ActivityRecord>> {
        self.source
            .connection()
            .with_conn(|conn| activity_ops::read_activity(conn, &self.columns, entity_id))
    }

    fn entity_ids(&self) -> MitraResult<Vec<String>> {
        self.source
            .connection()
            .with_conn(|conn| activity_ops::entity_ids(conn, &self.columns))
    }
}
