//! Normalization of model-generated SQL.

use std::sync::LazyLock;

use regex::Regex;

/// Leading `SQLQuery:` labels and fence language tags, possibly repeated.
static RE_LEADING_NOISE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\A(?:\s*(?:sql\s*query\s*:|sqlite\b|sql\b))*\s*").ok()
});

/// Strip markdown fences, language tags and `SQLQuery:` labels, trim, and
/// lowercase. Idempotent.
pub fn clean_query(raw: &str) -> String {
    let without_fences = raw.replace('`', "");
    let stripped = match RE_LEADING_NOISE.as_ref() {
        Some(re) => re.replace(&without_fences, "").into_owned(),
        None => without_fences,
    };
    stripped.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markdown_fence_with_language_tag() {
        let raw = "```sql\nSELECT nama_produk FROM kandidat_produk LIMIT 5;\n```";
        assert_eq!(clean_query(raw), "select nama_produk from kandidat_produk limit 5;");
    }

    #[test]
    fn strips_sqlquery_label() {
        assert_eq!(clean_query("SQLQuery: SELECT 1"), "select 1");
        assert_eq!(clean_query("SQL query:  SELECT 1 "), "select 1");
        assert_eq!(clean_query("```sqlite\nSQLQuery: SELECT 1```"), "select 1");
    }

    #[test]
    fn keeps_identifiers_starting_with_sql() {
        assert_eq!(
            clean_query("SELECT name FROM sqlite_master"),
            "select name from sqlite_master"
        );
        assert_eq!(clean_query("sqlite_master"), "sqlite_master");
    }

    #[test]
    fn plain_query_is_lowercased_and_trimmed() {
        assert_eq!(clean_query("  Select A From B \n"), "select a from b");
    }

    #[test]
    fn idempotent() {
        let once = clean_query("```sql\nSQLQuery: SELECT x FROM y```");
        assert_eq!(clean_query(&once), once);
    }
}
