//! Built-in few-shot examples for product recommendation questions.

use super::FewShotExample;

const SUBSTITUTION_QUERY_HEAD: &str = "select produk_substitusi, produk_awal, is_better_margin, \
harga_produk_substitusi, pemasok_produk_substitusi, pemasok_produk_awal, \
bahan_aktif_produk_substitusi, bahan_aktif_produk_awal
from substitusi_produk
where region || '_' || produk_awal in (
    select detail_mitra.region_mitra || '_' || rekomendasi_produk.nama_produk
    from detail_mitra
    inner join rekomendasi_produk on rekomendasi_produk.mitra_id = detail_mitra.mitra_id
    where detail_mitra.mitra_id = ";

fn substitution_query(mitra_id: i64) -> String {
    format!("{SUBSTITUTION_QUERY_HEAD}{mitra_id}\n)")
}

/// Substitute-product lookups for three known mitras.
pub fn builtin_examples() -> Vec<FewShotExample> {
    vec![
        FewShotExample::new(
            "Buatkan simpulan mengenai rekomendasi produk untuk Sinergi Tani dengan mitra id 32516",
            substitution_query(32516),
        ),
        FewShotExample::new(
            "Berikan rekomendasi produk untuk Dzamar Tani dengan mitra id 49291",
            substitution_query(49291),
        ),
        FewShotExample::new(
            "Rekomendasikan produk untuk Marem Tani dengan mitra id 46465",
            substitution_query(46465),
        ),
    ]
}
