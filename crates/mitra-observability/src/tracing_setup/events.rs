//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

use std::time::Duration;

/// Human-readable retry notice, e.g. `[Retry 2: Wait for 6 seconds] model unavailable`.
pub fn retry_notice(attempt: u32, wait: Duration, error: &str) -> String {
    format!("[Retry {attempt}: Wait for {} seconds] {error}", wait.as_secs())
}

/// Log a scheduled chain retry.
pub fn retry_scheduled(attempt: u32, wait: Duration, error: &str, transient: bool) {
    tracing::warn!(
        event = "retry_scheduled",
        attempt = attempt,
        wait_secs = wait.as_secs(),
        error = %error,
        transient = transient,
        "{}",
        retry_notice(attempt, wait, error)
    );
}

/// Log substitution of the fallback query after an empty result.
pub fn fallback_query_used(question: &str, fallback_query: &str) {
    tracing::info!(
        event = "fallback_query_used",
        question = %question,
        fallback_query = %fallback_query,
        "generated query returned no rows, using fallback query"
    );
}

/// Log a chain that ran out of attempts.
pub fn chain_exhausted(question: &str, attempts: u32, last_error: &str) {
    tracing::error!(
        event = "chain_exhausted",
        question = %question,
        attempts = attempts,
        last_error = %last_error,
        "chain exhausted all attempts"
    );
}

/// Log a completed purchase-probability estimate.
pub fn estimate_completed(entity_id: &str, record_count: usize, probability: f64) {
    tracing::info!(
        event = "estimate_completed",
        entity_id = %entity_id,
        record_count = record_count,
        probability = probability,
        "purchase probability estimated"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
