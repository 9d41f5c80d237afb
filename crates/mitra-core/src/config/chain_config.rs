use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Chain invoker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Attempts before the chain gives up with an empty answer.
    pub max_attempts: u32,
    /// Wait before the first retry, in seconds.
    pub initial_retry_delay_secs: u64,
    /// Cap applied when the retry delay doubles, in seconds.
    pub max_retry_delay_secs: u64,
    /// Row limit passed to the query model.
    pub top_k: usize,
    /// Number of few-shot examples included in the query prompt.
    pub few_shot_k: usize,
}

impl ChainConfig {
    pub fn initial_retry_delay(&self) -> Duration {
        Duration::from_secs(self.initial_retry_delay_secs)
    }

    pub fn max_retry_delay(&self) -> Duration {
        Duration::from_secs(self.max_retry_delay_secs)
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::DEFAULT_MAX_ATTEMPTS,
            initial_retry_delay_secs: defaults::DEFAULT_INITIAL_RETRY_DELAY_SECS,
            max_retry_delay_secs: defaults::DEFAULT_MAX_RETRY_DELAY_SECS,
            top_k: defaults::DEFAULT_TOP_K,
            few_shot_k: defaults::DEFAULT_FEW_SHOT_K,
        }
    }
}
