use serde::{Deserialize, Serialize};

/// A business partner as seen by the summary runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MitraProfile {
    pub mitra_id: i64,
    pub nama_mitra: String,
    pub region_mitra: String,
}
