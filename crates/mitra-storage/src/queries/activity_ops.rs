//! Activity record reads from a user-described table.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use mitra_core::errors::{MitraResult, StorageError};
use mitra_core::models::ActivityRecord;
use rusqlite::types::ValueRef;
use rusqlite::Connection;

use super::quote_ident;
use crate::activity::ActivityColumns;
use crate::to_storage_err;

/// Parse a timestamp cell: epoch seconds, RFC 3339, `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD`.
pub fn parse_timestamp(value: ValueRef<'_>) -> MitraResult<DateTime<Utc>> {
    let invalid = |what: String| -> mitra_core::MitraError {
        StorageError::InvalidRecord {
            reason: format!("unparseable timestamp {what}"),
        }
        .into()
    };
    match value {
        ValueRef::Integer(secs) => Utc
            .timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| invalid(secs.to_string())),
        ValueRef::Text(bytes) => {
            let text = String::from_utf8_lossy(bytes);
            let text = text.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                return Ok(dt.with_timezone(&Utc));
            }
            for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
                if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
                    return Ok(Utc.from_utc_datetime(&naive));
                }
            }
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|naive| Utc.from_utc_datetime(&naive))
                .ok_or_else(|| invalid(format!("'{text}'")))
        }
        other => Err(invalid(format!("of type {:?}", other.data_type()))),
    }
}

/// Numeric cell as `f64`; NULL counts as no activity.
pub fn parse_value(value: ValueRef<'_>) -> MitraResult<f64> {
    match value {
        ValueRef::Null => Ok(0.0),
        ValueRef::Integer(i) => Ok(i as f64),
        ValueRef::Real(f) => Ok(f),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).trim().parse::<f64>().map_err(|e| {
            StorageError::InvalidRecord {
                reason: format!("non-numeric activity value: {e}"),
            }
            .into()
        }),
        ValueRef::Blob(_) => Err(StorageError::InvalidRecord {
            reason: "blob activity value".into(),
        }
        .into()),
    }
}

/// All records for `entity_id`, oldest first.
pub fn read_activity(
    conn: &Connection,
    columns: &ActivityColumns,
    entity_id: &str,
) -> MitraResult<Vec<ActivityRecord>> {
    let sql = format!(
        "SELECT {ts}, {val} FROM {table} WHERE CAST({entity} AS TEXT) = ?1 ORDER BY {ts}",
        ts = quote_ident(&columns.timestamp_column),
        val = quote_ident(&columns.value_column),
        table = quote_ident(&columns.table),
        entity = quote_ident(&columns.entity_column),
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let mut rows = stmt.query([entity_id]).map_err(|e| to_storage_err(e.to_string()))?;
    let mut records = Vec::new();
    while let Some(row) = rows.next().map_err(|e| to_storage_err(e.to_string()))? {
        let ts = row.get_ref(0).map_err(|e| to_storage_err(e.to_string()))?;
        let val = row.get_ref(1).map_err(|e| to_storage_err(e.to_string()))?;
        records.push(ActivityRecord::new(entity_id, parse_timestamp(ts)?, parse_value(val)?));
    }
    Ok(records)
}

/// Distinct entity ids, sorted.
pub fn entity_ids(conn: &Connection, columns: &ActivityColumns) -> MitraResult<Vec<String>> {
    let sql = format!(
        "SELECT DISTINCT CAST({entity} AS TEXT) FROM {table} WHERE {entity} IS NOT NULL ORDER BY 1",
        entity = quote_ident(&columns.entity_column),
        table = quote_ident(&columns.table),
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let ids = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(ids)
}
