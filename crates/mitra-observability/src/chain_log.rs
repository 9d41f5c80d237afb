//! Per-run chain logging: attempts, fallback use, answer presence, latency.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A single chain run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainRunEntry {
    /// Mitra the run was for, when known.
    pub mitra_id: Option<i64>,
    /// Faults retried during the run.
    pub attempts: u32,
    pub used_fallback: bool,
    /// False when the run was exhausted.
    pub answered: bool,
    pub latency: Duration,
    pub timestamp_epoch_ms: i64,
}

impl ChainRunEntry {
    /// Create a new entry with the timestamp set to now.
    pub fn new(
        mitra_id: Option<i64>,
        attempts: u32,
        used_fallback: bool,
        answered: bool,
        latency: Duration,
    ) -> Self {
        Self {
            mitra_id,
            attempts,
            used_fallback,
            answered,
            latency,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Append-only chain run log.
#[derive(Debug, Clone, Default)]
pub struct ChainRunLog {
    entries: Vec<ChainRunEntry>,
    /// Maximum entries to retain (ring buffer behavior).
    max_entries: usize,
}

impl ChainRunLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: 50_000,
        }
    }

    /// Create with a custom capacity.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Record a run.
    pub fn record(&mut self, entry: ChainRunEntry) {
        tracing::debug!(
            event = "chain_run_logged",
            mitra_id = ?entry.mitra_id,
            attempts = entry.attempts,
            used_fallback = entry.used_fallback,
            answered = entry.answered,
            latency_ms = entry.latency.as_millis() as u64,
            "chain run logged"
        );

        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.drain(..self.entries.len() - self.max_entries);
        }
    }

    pub fn entries(&self) -> &[ChainRunEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Total retries across all runs.
    pub fn total_retries(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.attempts)).sum()
    }

    /// Fraction of runs that needed the fallback query.
    pub fn fallback_rate(&self) -> f64 {
        self.rate(|e| e.used_fallback)
    }

    /// Fraction of runs that produced an answer.
    pub fn answer_rate(&self) -> f64 {
        self.rate(|e| e.answered)
    }

    /// Average latency across all runs.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    fn rate(&self, pred: impl Fn(&ChainRunEntry) -> bool) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.iter().filter(|e| pred(e)).count() as f64 / self.entries.len() as f64
    }
}
