//! Chain invoker: question → query → result → answer, with bounded retry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use mitra_core::config::ChainConfig;
use mitra_core::errors::MitraResult;
use mitra_core::traits::{ILanguageModel, IQueryExecutor, ISleeper, ThreadSleeper};
use mitra_core::{ChainStage, ChainState};
use mitra_observability::tracing_setup::events;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backoff::RetrySchedule;
use crate::columns::columns_from_query;
use crate::fallback::fallback_query;
use crate::prompt::{self, ExampleSelector};
use crate::sanitize::clean_query;

/// A question, optionally tied to the mitra the fallback query should use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRequest {
    pub question: String,
    pub mitra_id: Option<i64>,
}

impl ChainRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            mitra_id: None,
        }
    }

    pub fn for_mitra(question: impl Into<String>, mitra_id: i64) -> Self {
        Self {
            question: question.into(),
            mitra_id: Some(mitra_id),
        }
    }
}

/// Final state plus answer. An exhausted run carries an empty answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainResponse {
    pub state: ChainState,
    pub answer: String,
    pub latency: Duration,
}

impl ChainResponse {
    pub fn is_exhausted(&self) -> bool {
        self.state.stage == ChainStage::Exhausted
    }
}

/// Drives one chain invocation to `Done` or `Exhausted`.
pub struct ChainInvoker {
    query_model: Arc<dyn ILanguageModel>,
    answer_model: Arc<dyn ILanguageModel>,
    executor: Arc<dyn IQueryExecutor>,
    sleeper: Arc<dyn ISleeper>,
    selector: ExampleSelector,
    schedule: RetrySchedule,
    top_k: usize,
}

impl ChainInvoker {
    /// Invoker with default [`ChainConfig`], built-in examples and a real sleeper.
    pub fn new(
        query_model: Arc<dyn ILanguageModel>,
        answer_model: Arc<dyn ILanguageModel>,
        executor: Arc<dyn IQueryExecutor>,
    ) -> Self {
        Self::from_config(query_model, answer_model, executor, &ChainConfig::default())
    }

    pub fn from_config(
        query_model: Arc<dyn ILanguageModel>,
        answer_model: Arc<dyn ILanguageModel>,
        executor: Arc<dyn IQueryExecutor>,
        config: &ChainConfig,
    ) -> Self {
        Self {
            query_model,
            answer_model,
            executor,
            sleeper: Arc::new(ThreadSleeper),
            selector: ExampleSelector::builtin(config.few_shot_k),
            schedule: RetrySchedule::from_config(config),
            top_k: config.top_k,
        }
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn ISleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_selector(mut self, selector: ExampleSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_schedule(mut self, schedule: RetrySchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn schedule(&self) -> &RetrySchedule {
        &self.schedule
    }

    /// Run the chain. Never returns an error: faults are retried and an
    /// exhausted run answers with the empty string.
    pub fn invoke(&self, request: &ChainRequest) -> ChainResponse {
        let _span = mitra_observability::chain_span!(request.question).entered();
        let started = Instant::now();
        let mut state = ChainState::new(request.question.clone(), self.schedule.first_delay());

        if self.schedule.attempts() == 0 {
            state.stage = ChainStage::Exhausted;
            events::chain_exhausted(&request.question, 0, "no attempts allowed");
            return finish(state, String::new(), started);
        }

        loop {
            match self.attempt(&mut state, request) {
                Ok(answer) => {
                    state.stage = ChainStage::Done;
                    debug!(attempts = state.attempt_count, "chain completed");
                    return finish(state, answer, started);
                }
                Err(e) => {
                    state.attempt_count += 1;
                    let error = e.to_string();
                    if !self.schedule.has_more(state.attempt_count) {
                        events::chain_exhausted(&request.question, state.attempt_count, &error);
                        state.stage = ChainStage::Exhausted;
                        return finish(state, String::new(), started);
                    }
                    events::retry_scheduled(
                        state.attempt_count,
                        state.retry_delay,
                        &error,
                        e.is_transient(),
                    );
                    self.sleeper.sleep(state.retry_delay);
                    state.retry_delay = self.schedule.next_delay(state.retry_delay);
                    state.stage = ChainStage::GenerateQuery;
                }
            }
        }
    }

    /// One pass from query generation to answer. `state.stage` marks where
    /// a fault happened.
    fn attempt(&self, state: &mut ChainState, request: &ChainRequest) -> MitraResult<String> {
        state.stage = ChainStage::GenerateQuery;
        state.used_fallback = false;
        let table_info = self.executor.table_info()?;
        let examples = self.selector.select(&state.question);
        let query_prompt =
            prompt::query_prompt(&state.question, &examples, &table_info, self.top_k);
        let raw = self.query_model.generate(&query_prompt)?;
        state.generated_query = clean_query(&raw);

        state.stage = ChainStage::ExecuteQuery;
        state.execution_result = self.executor.run(&state.generated_query)?;
        state.result_columns = columns_from_query(&state.generated_query);

        state.stage = ChainStage::CheckEmpty;
        if state.execution_result.is_empty() {
            if let Some(mitra_id) = request.mitra_id {
                state.stage = ChainStage::FallbackQuery;
                let query = fallback_query(mitra_id);
                events::fallback_query_used(&state.question, &query);
                state.execution_result = self.executor.run(&query)?;
                state.result_columns = columns_from_query(&query);
                state.generated_query = query;
                state.used_fallback = true;
            }
        }

        state.stage = ChainStage::GenerateAnswer;
        let answer_prompt = prompt::answer_prompt(state);
        self.answer_model.generate(&answer_prompt)
    }
}

fn finish(state: ChainState, answer: String, started: Instant) -> ChainResponse {
    ChainResponse {
        state,
        answer,
        latency: started.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mitra_core::errors::{ChainError, MitraError};
    use std::sync::Mutex;

    struct Echo;

    impl ILanguageModel for Echo {
        fn generate(&self, _prompt: &str) -> MitraResult<String> {
            Ok("```sql\nSELECT a FROM t```".to_string())
        }
        fn name(&self) -> &str {
            "echo"
        }
    }

    struct Down;

    impl ILanguageModel for Down {
        fn generate(&self, _prompt: &str) -> MitraResult<String> {
            Err(ChainError::RateLimited {
                model: "down".into(),
            }
            .into())
        }
        fn name(&self) -> &str {
            "down"
        }
    }

    struct OneRow;

    impl IQueryExecutor for OneRow {
        fn run(&self, _query: &str) -> MitraResult<String> {
            Ok("[(1,)]".to_string())
        }
        fn table_info(&self) -> MitraResult<String> {
            Ok("CREATE TABLE t (a INTEGER)".to_string())
        }
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Duration>>);

    impl ISleeper for Recorder {
        fn sleep(&self, duration: Duration) {
            if let Ok(mut slept) = self.0.lock() {
                slept.push(duration);
            }
        }
    }

    #[test]
    fn success_sanitizes_query() {
        let invoker = ChainInvoker::new(Arc::new(Echo), Arc::new(Echo), Arc::new(OneRow));
        let response = invoker.invoke(&ChainRequest::new("q"));
        assert_eq!(response.state.stage, ChainStage::Done);
        assert_eq!(response.state.generated_query, "select a from t");
        assert_eq!(response.state.result_columns, vec!["a"]);
        assert_eq!(response.state.attempt_count, 0);
    }

    #[test]
    fn zero_attempts_exhausts_without_calls() {
        let recorder = Arc::new(Recorder::default());
        let config = ChainConfig {
            max_attempts: 0,
            ..ChainConfig::default()
        };
        let invoker =
            ChainInvoker::from_config(Arc::new(Down), Arc::new(Down), Arc::new(OneRow), &config)
                .with_sleeper(recorder.clone());
        let response = invoker.invoke(&ChainRequest::new("q"));
        assert!(response.is_exhausted());
        assert!(response.answer.is_empty());
        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[test]
    fn answer_model_fault_is_retried_and_exhausts() {
        let recorder = Arc::new(Recorder::default());
        let config = ChainConfig {
            max_attempts: 3,
            ..ChainConfig::default()
        };
        let invoker =
            ChainInvoker::from_config(Arc::new(Echo), Arc::new(Down), Arc::new(OneRow), &config)
                .with_sleeper(recorder.clone());
        let response = invoker.invoke(&ChainRequest::new("q"));
        assert!(response.is_exhausted());
        assert_eq!(response.state.attempt_count, 3);
        assert_eq!(
            *recorder.0.lock().unwrap(),
            vec![Duration::from_secs(3), Duration::from_secs(6)]
        );
        assert!(matches!(
            Down.generate("").unwrap_err(),
            MitraError::ChainError(ChainError::RateLimited { .. })
        ));
    }
}
