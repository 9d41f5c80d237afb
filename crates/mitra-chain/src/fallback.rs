//! Deterministic query used when the generated query returns no rows.

/// Products in the clusters the mitra belongs to.
pub fn fallback_query(mitra_id: i64) -> String {
    format!(
        "select nama_produk from kandidat_produk where cluster in \
         (select cluster_mitra from detail_mitra where mitra_id = {mitra_id});"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::columns_from_query;

    #[test]
    fn references_cluster_lookup_for_mitra() {
        let q = fallback_query(32516);
        assert_eq!(
            q,
            "select nama_produk from kandidat_produk where cluster in \
             (select cluster_mitra from detail_mitra where mitra_id = 32516);"
        );
        assert_eq!(columns_from_query(&q), vec!["nama_produk"]);
    }
}
