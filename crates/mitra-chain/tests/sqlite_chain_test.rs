use std::sync::{Arc, Mutex};
use std::time::Duration;

use mitra_chain::{ChainInvoker, ChainRequest};
use mitra_core::errors::MitraResult;
use mitra_core::traits::{ILanguageModel, ISleeper};
use mitra_storage::{SqliteDataSource, TableData};

struct Fixed {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl Fixed {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

impl ILanguageModel for Fixed {
    fn generate(&self, prompt: &str) -> MitraResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

struct NoSleep;

impl ISleeper for NoSleep {
    fn sleep(&self, _duration: Duration) {}
}

fn source() -> Arc<SqliteDataSource> {
    let source = SqliteDataSource::open_in_memory().unwrap();
    source
        .load_tables(&[
            TableData::from_rows(
                "kandidat_produk",
                &["cluster", "nama_produk"],
                vec![
                    vec![1i64.into(), "Pupuk NPK".into()],
                    vec![2i64.into(), "Herbisida X".into()],
                ],
            ),
            TableData::from_rows(
                "detail_mitra",
                &["mitra_id", "nama_mitra", "region_mitra", "cluster_mitra"],
                vec![vec![32516i64.into(), "Sinergi Tani".into(), "Jatim".into(), 1i64.into()]],
            ),
            TableData::from_rows(
                "substitusi_produk",
                &["region", "produk_awal", "produk_substitusi"],
                vec![vec!["Jateng".into(), "Pupuk A".into(), "Pupuk B".into()]],
            ),
        ])
        .unwrap();
    Arc::new(source)
}

#[test]
fn empty_generated_result_falls_back_to_cluster_products() {
    let query_model = Fixed::new(
        "```sql\nSELECT produk_substitusi FROM substitusi_produk WHERE region = 'Jatim'\n```",
    );
    let answer_model = Fixed::new("Rekomendasi: Pupuk NPK");
    let invoker = ChainInvoker::new(query_model.clone(), answer_model.clone(), source())
        .with_sleeper(Arc::new(NoSleep));

    let response = invoker.invoke(&ChainRequest::for_mitra("Berikan produk untuk mitra id 32516.", 32516));

    assert_eq!(response.answer, "Rekomendasi: Pupuk NPK");
    assert_eq!(response.state.attempt_count, 0);
    assert!(response.state.used_fallback);
    assert_eq!(response.state.execution_result, "[('Pupuk NPK',)]");

    let query_prompt = &query_model.prompts.lock().unwrap()[0];
    assert!(query_prompt.contains("CREATE TABLE \"kandidat_produk\""));
    assert!(query_prompt.contains("rows from detail_mitra table:"));

    let answer_prompt = &answer_model.prompts.lock().unwrap()[0];
    assert!(answer_prompt.contains("SQL Fields: 'nama_produk'"));
}

#[test]
fn invalid_sql_exhausts_without_error() {
    let query_model = Fixed::new("select missing_column from kandidat_produk");
    let answer_model = Fixed::new("never");
    let invoker = ChainInvoker::new(query_model.clone(), answer_model.clone(), source())
        .with_sleeper(Arc::new(NoSleep))
        .with_schedule(mitra_chain::RetrySchedule::new().max_attempts(3));

    let response = invoker.invoke(&ChainRequest::new("q"));

    assert!(response.is_exhausted());
    assert_eq!(response.answer, "");
    assert_eq!(response.state.attempt_count, 3);
    assert_eq!(query_model.prompts.lock().unwrap().len(), 3);
    assert!(answer_model.prompts.lock().unwrap().is_empty());
}

#[test]
fn generated_delete_is_retried_and_leaves_table_intact() {
    let source = source();
    let query_model = Fixed::new("```sql\nDELETE FROM kandidat_produk\n```");
    let answer_model = Fixed::new("never");
    let invoker = ChainInvoker::new(query_model.clone(), answer_model.clone(), source.clone())
        .with_sleeper(Arc::new(NoSleep))
        .with_schedule(mitra_chain::RetrySchedule::new().max_attempts(2));

    let response = invoker.invoke(&ChainRequest::for_mitra("hapus semua", 32516));

    assert!(response.is_exhausted());
    assert_eq!(response.state.attempt_count, 2);
    assert!(answer_model.prompts.lock().unwrap().is_empty());
    assert_eq!(source.run("select count(*) from kandidat_produk").unwrap(), "[(2,)]");
}
