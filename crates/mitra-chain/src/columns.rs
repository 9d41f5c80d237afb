//! Result column names recovered from query text.
//!
//! The heuristic: take the text before the first `from`, remove `select`,
//! split on commas, and keep what follows the last ` as ` in each
//! expression, trimmed. It does not parse SQL, so nested selects, commas
//! inside function calls, and a `from` inside an identifier all confuse it.

/// Column names for `query` per the heuristic above.
pub fn columns_from_query(query: &str) -> Vec<String> {
    let head = query.split("from").next().unwrap_or_default();
    head.replace("select", "")
        .trim()
        .split(',')
        .map(|expr| expr.rsplit(" as ").next().unwrap_or(expr).trim().to_string())
        .collect()
}

/// Render columns as a quoted, comma separated list: `'a', 'b'`.
pub fn format_columns(columns: &[String]) -> String {
    columns
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
