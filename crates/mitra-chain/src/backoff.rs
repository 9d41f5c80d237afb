//! Retry wait schedule for the chain invoker.

use std::time::Duration;

use mitra_core::config::ChainConfig;

/// Bounded exponential backoff: each wait doubles, capped at `max_delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrySchedule {
    max_attempts: u32,
    initial_delay: Duration,
    max_delay: Duration,
}

impl Default for RetrySchedule {
    fn default() -> Self {
        Self::from_config(&ChainConfig::default())
    }
}

impl RetrySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ChainConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            initial_delay: config.initial_retry_delay(),
            max_delay: config.max_retry_delay(),
        }
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn first_delay(&self) -> Duration {
        self.initial_delay.min(self.max_delay)
    }

    /// Wait that follows `current`.
    pub fn next_delay(&self, current: Duration) -> Duration {
        current.saturating_mul(2).min(self.max_delay)
    }

    /// Whether another attempt follows after `failed` faults.
    pub fn has_more(&self, failed: u32) -> bool {
        failed < self.max_attempts
    }

    /// The waits slept between attempts when every attempt faults.
    pub fn delays(&self) -> Vec<Duration> {
        let mut out = Vec::new();
        let mut delay = self.first_delay();
        for _ in 1..self.max_attempts {
            out.push(delay);
            delay = self.next_delay(delay);
        }
        out
    }
}
