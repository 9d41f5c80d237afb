//! In-memory table description handed to `SqliteDataSource::load_table`.

use rusqlite::types::{ToSql, ToSqlOutput, Value};
use serde::{Deserialize, Serialize};

/// Column storage class. Each maps to one SQL type in the generated DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Boolean,
    Integer,
    Text,
    Real,
}

impl ColumnKind {
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnKind::Boolean => "BOOLEAN",
            ColumnKind::Integer => "INTEGER",
            ColumnKind::Text => "VARCHAR(100)",
            ColumnKind::Real => "FLOAT",
        }
    }

    /// Narrowest kind that holds every non-null cell. All-null columns are text.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut kind: Option<ColumnKind> = None;
        for cell in cells {
            let cell_kind = match cell {
                CellValue::Null => continue,
                CellValue::Bool(_) => ColumnKind::Boolean,
                CellValue::Integer(_) => ColumnKind::Integer,
                CellValue::Real(_) => ColumnKind::Real,
                CellValue::Text(_) => return ColumnKind::Text,
            };
            kind = Some(match (kind, cell_kind) {
                (None, k) => k,
                (Some(a), b) if a == b => a,
                (Some(ColumnKind::Integer), ColumnKind::Real)
                | (Some(ColumnKind::Real), ColumnKind::Integer) => ColumnKind::Real,
                _ => return ColumnKind::Text,
            });
        }
        kind.unwrap_or(ColumnKind::Text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// One cell of a loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl ToSql for CellValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            CellValue::Null => ToSqlOutput::Owned(Value::Null),
            CellValue::Bool(b) => ToSqlOutput::Owned(Value::Integer(i64::from(*b))),
            CellValue::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            CellValue::Real(f) => ToSqlOutput::Owned(Value::Real(*f)),
            CellValue::Text(s) => ToSqlOutput::Borrowed(s.as_str().into()),
        })
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Real(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Null, Into::into)
    }
}

/// A named table with typed columns and row-major cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Vec<CellValue>>,
}

impl TableData {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnSpec>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Build a table whose column kinds are inferred from the cells.
    pub fn from_rows(
        name: impl Into<String>,
        column_names: &[&str],
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        let columns = column_names
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let kind = ColumnKind::infer(rows.iter().filter_map(|row| row.get(i)));
                ColumnSpec::new(*col, kind)
            })
            .collect();
        Self::new(name, columns, rows)
    }
}
