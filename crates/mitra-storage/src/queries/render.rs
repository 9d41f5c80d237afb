//! Textual rendering of SQLite values and rows.
//!
//! Rows render the way the query model's few-shot material shows them: a
//! list of tuples, strings quoted, NULL as `None`, one-element tuples with a
//! trailing comma.

use mitra_core::constants::MAX_RESULT_CELL_CHARS;
use rusqlite::types::ValueRef;

const TRUNCATION_SUFFIX: &str = "...";

/// Shorten `text` to at most `max_chars` characters, cutting at the last
/// word boundary and appending `...`. Shorter text is returned unchanged.
pub fn truncate_word(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(TRUNCATION_SUFFIX.len());
    let head: String = text.chars().take(keep).collect();
    let cut = match head.rfind(' ') {
        Some(idx) => &head[..idx],
        None => head.as_str(),
    };
    format!("{cut}{TRUNCATION_SUFFIX}")
}

/// Quote a string literal: single quotes unless the text contains a single
/// quote and no double quote.
pub fn quote_str(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Render a float keeping a fractional part on integral values (`2.0`).
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{value:?}")
    }
}

fn format_blob(bytes: &[u8]) -> String {
    let mut out = String::from("b'");
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out.push('\'');
    out
}

/// Value as it appears inside a result tuple.
pub fn repr_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "None".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => format_real(f),
        ValueRef::Text(bytes) => {
            let text = String::from_utf8_lossy(bytes);
            quote_str(&truncate_word(&text, MAX_RESULT_CELL_CHARS))
        }
        ValueRef::Blob(bytes) => format_blob(bytes),
    }
}

/// Value as it appears in a tab-separated sample row: unquoted.
pub fn plain_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "None".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => format_real(f),
        ValueRef::Text(bytes) => truncate_word(&String::from_utf8_lossy(bytes), MAX_RESULT_CELL_CHARS),
        ValueRef::Blob(bytes) => format_blob(bytes),
    }
}

/// Render one row of already-rendered cells as a tuple.
pub fn render_tuple(cells: &[String]) -> String {
    match cells {
        [single] => format!("({single},)"),
        _ => format!("({})", cells.join(", ")),
    }
}

/// Render rows as a list of tuples. No rows renders as the empty string.
pub fn render_rows(rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let tuples: Vec<String> = rows.iter().map(|r| render_tuple(r)).collect();
    format!("[{}]", tuples.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_word("obat batuk", 100), "obat batuk");
    }

    #[test]
    fn long_text_cuts_at_word_boundary() {
        let text = "kata ".repeat(30);
        let out = truncate_word(&text, 100);
        assert!(out.ends_with("kata..."));
        assert!(out.chars().count() <= 100);
    }

    #[test]
    fn long_word_without_spaces_is_cut_hard() {
        let text = "x".repeat(150);
        let out = truncate_word(&text, 100);
        assert_eq!(out.chars().count(), 100);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn quoting_follows_content() {
        assert_eq!(quote_str("abc"), "'abc'");
        assert_eq!(quote_str("it's"), "\"it's\"");
        assert_eq!(quote_str("a'b\"c"), "'a\\'b\"c'");
        assert_eq!(quote_str("line\nbreak"), "'line\\nbreak'");
    }

    #[test]
    fn values_render_like_literals() {
        assert_eq!(repr_value(ValueRef::Null), "None");
        assert_eq!(repr_value(ValueRef::Integer(7)), "7");
        assert_eq!(repr_value(ValueRef::Real(2.0)), "2.0");
        assert_eq!(repr_value(ValueRef::Real(0.25)), "0.25");
        assert_eq!(repr_value(ValueRef::Text(b"Paracetamol")), "'Paracetamol'");
        assert_eq!(plain_value(ValueRef::Text(b"Paracetamol")), "Paracetamol");
        assert_eq!(repr_value(ValueRef::Blob(&[0x41, 0x00])), "b'A\\x00'");
    }

    #[test]
    fn tuples_and_lists() {
        assert_eq!(render_tuple(&["'a'".to_string()]), "('a',)");
        assert_eq!(render_tuple(&["'a'".to_string(), "1".to_string()]), "('a', 1)");
        let rows = vec![vec!["'a'".to_string()], vec!["'b'".to_string()]];
        assert_eq!(render_rows(&rows), "[('a',), ('b',)]");
        assert_eq!(render_rows(&[]), "");
    }
}
