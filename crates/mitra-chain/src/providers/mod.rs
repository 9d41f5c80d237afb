//! Language-model providers.

pub mod gemini;

use std::sync::Arc;

pub use gemini::GeminiModel;

use mitra_core::config::ModelConfig;
use mitra_core::errors::MitraResult;
use mitra_core::traits::ILanguageModel;
use tracing::info;

/// Query and answer models named in `config`, sharing one API key.
pub fn create_models(
    config: &ModelConfig,
) -> MitraResult<(Arc<dyn ILanguageModel>, Arc<dyn ILanguageModel>)> {
    let query = GeminiModel::from_env(&config.query_model, config)?;
    let answer = GeminiModel::from_env(&config.answer_model, config)?;
    info!(
        query_model = %config.query_model,
        answer_model = %config.answer_model,
        "language models configured"
    );
    Ok((Arc::new(query), Arc::new(answer)))
}
