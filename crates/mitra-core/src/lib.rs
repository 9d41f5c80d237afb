//! # mitra-core
//!
//! Foundation crate for the Mitra insight pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MitraConfig;
pub use errors::{MitraError, MitraResult};
pub use models::{
    ActivityRecord, Cadence, ChainStage, ChainState, FrequencySeries, MitraProfile,
    PurchaseProbability, SeriesPoint, SummaryRecord, SummarySource,
};
