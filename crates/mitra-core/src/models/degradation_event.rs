use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A degradation event when a stage falls back to a lower-quality path,
/// e.g. the cluster lookup replacing an empty generated query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
