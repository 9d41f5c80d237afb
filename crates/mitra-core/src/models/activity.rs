use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw, irregularly spaced activity observation for an entity
/// (a mitra, a product, or a mitra/product pair).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub entity_id: String,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl ActivityRecord {
    pub fn new(entity_id: impl Into<String>, timestamp: DateTime<Utc>, value: f64) -> Self {
        Self {
            entity_id: entity_id.into(),
            timestamp,
            value,
        }
    }
}
