use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Stage of the chain invoker's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainStage {
    GenerateQuery,
    ExecuteQuery,
    CheckEmpty,
    FallbackQuery,
    GenerateAnswer,
    Done,
    Exhausted,
}

impl ChainStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, ChainStage::Done | ChainStage::Exhausted)
    }
}

/// Mutable state carried across retry iterations of one chain invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainState {
    pub question: String,
    pub generated_query: String,
    pub execution_result: String,
    pub result_columns: Vec<String>,
    /// Faults seen so far. Zero on a first-attempt success.
    pub attempt_count: u32,
    /// Wait applied before the next retry.
    #[serde(with = "duration_secs")]
    pub retry_delay: Duration,
    pub stage: ChainStage,
    pub used_fallback: bool,
}

impl ChainState {
    pub fn new(question: impl Into<String>, retry_delay: Duration) -> Self {
        Self {
            question: question.into(),
            generated_query: String::new(),
            execution_result: String::new(),
            result_columns: Vec::new(),
            attempt_count: 0,
            retry_delay,
            stage: ChainStage::GenerateQuery,
            used_fallback: false,
        }
    }

    /// Whether any result column contains `marker`.
    pub fn mentions_column(&self, marker: &str) -> bool {
        self.result_columns.iter().any(|c| c.contains(marker))
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
