//! Record every degradation event: component, failure mode, fallback used, timestamp.

use chrono::{DateTime, Utc};
use mitra_core::models::DegradationEvent;
use serde::{Deserialize, Serialize};

/// A degradation event plus the subject it affected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    /// Entity the degradation applied to, e.g. a mitra id.
    pub subject: Option<String>,
}

/// Tracks degradation events for reporting.
#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new degradation event.
    pub fn record(&mut self, event: DegradationEvent, subject: Option<String>) {
        crate::tracing_setup::events::degradation_triggered(
            &event.component,
            &event.failure,
            &event.fallback_used,
        );
        self.events.push(TrackedDegradation { event, subject });
    }

    /// Convenience for recording with the timestamp set to now.
    pub fn record_now(
        &mut self,
        component: &str,
        failure: &str,
        fallback_used: &str,
        subject: Option<String>,
    ) {
        self.record(
            DegradationEvent {
                component: component.to_string(),
                failure: failure.to_string(),
                fallback_used: fallback_used.to_string(),
                timestamp: Utc::now(),
            },
            subject,
        );
    }

    pub fn events(&self) -> &[TrackedDegradation] {
        &self.events
    }

    /// Events for one component.
    pub fn for_component(&self, component: &str) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.event.component == component)
            .collect()
    }

    /// Events recorded at or after `since`.
    pub fn since(&self, since: DateTime<Utc>) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.event.timestamp >= since)
            .collect()
    }
}
