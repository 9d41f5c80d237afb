use crate::errors::MitraResult;
use crate::models::ActivityRecord;

/// Source of raw activity records.
pub trait IActivityReader: Send + Sync {
    /// All records for one entity, in any order.
    fn read_activity(&self, entity_id: &str) -> MitraResult<Vec<ActivityRecord>>;

    /// Every entity that has at least one record.
    fn entity_ids(&self) -> MitraResult<Vec<String>>;
}
