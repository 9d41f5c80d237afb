use serde::{Deserialize, Serialize};

use super::defaults;

/// Language-model endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model that turns questions into SQL.
    pub query_model: String,
    /// Model that turns query results into prose.
    pub answer_model: String,
    /// Base URL of the generative language API.
    pub api_base: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            query_model: defaults::DEFAULT_QUERY_MODEL.to_string(),
            answer_model: defaults::DEFAULT_ANSWER_MODEL.to_string(),
            api_base: defaults::DEFAULT_API_BASE.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            temperature: defaults::DEFAULT_TEMPERATURE,
            timeout_secs: defaults::DEFAULT_MODEL_TIMEOUT_SECS,
        }
    }
}
