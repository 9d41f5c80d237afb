//! # mitra-observability
//!
//! Structured tracing with span definitions, per-run chain logging, and
//! degradation event tracking.

pub mod chain_log;
pub mod degradation;
pub mod tracing_setup;

pub use chain_log::{ChainRunEntry, ChainRunLog};
pub use degradation::{DegradationTracker, TrackedDegradation};
pub use tracing_setup::{init_tracing, init_tracing_with_config, init_tracing_with_filter};
