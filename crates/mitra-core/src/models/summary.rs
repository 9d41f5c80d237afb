use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{SOURCE_GMV_CONTRIBUTION, SOURCE_SUBSTITUTION};

/// Where the recommended products in a summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummarySource {
    /// Substitution-product analysis.
    #[serde(rename = "Mystique")]
    Substitution,
    /// Top GMV contributors.
    #[serde(rename = "GMV Contribution")]
    GmvContribution,
}

impl SummarySource {
    pub fn as_str(self) -> &'static str {
        match self {
            SummarySource::Substitution => SOURCE_SUBSTITUTION,
            SummarySource::GmvContribution => SOURCE_GMV_CONTRIBUTION,
        }
    }
}

/// One row of the per-mitra summary output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub snapshot_dt: NaiveDate,
    pub mitra_id: i64,
    pub nama_mitra: String,
    pub product_summary: String,
    pub source: SummarySource,
    /// JSON-serialized chain state of the run that produced the summary.
    pub llm_metadata: String,
}
