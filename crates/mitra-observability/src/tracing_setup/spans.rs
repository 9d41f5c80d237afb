//! Span definitions per operation: estimation, simulation, chain invocation, summary batch.

/// Create a purchase-probability estimation span.
#[macro_export]
macro_rules! estimation_span {
    ($entity_id:expr, $cadence:expr) => {
        tracing::info_span!("mitra.estimation", entity_id = %$entity_id, cadence = %$cadence)
    };
}

/// Create a Monte Carlo simulation span.
#[macro_export]
macro_rules! simulation_span {
    ($series_len:expr, $n_trials:expr) => {
        tracing::info_span!("mitra.simulation", series_len = $series_len, n_trials = $n_trials)
    };
}

/// Create a chain invocation span.
#[macro_export]
macro_rules! chain_span {
    ($question:expr) => {
        tracing::info_span!("mitra.chain", question = %$question)
    };
}

/// Create a batch summary span.
#[macro_export]
macro_rules! summary_span {
    ($mitra_count:expr) => {
        tracing::info_span!("mitra.summary", mitra_count = $mitra_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ESTIMATION: &str = "mitra.estimation";
    pub const SIMULATION: &str = "mitra.simulation";
    pub const CHAIN: &str = "mitra.chain";
    pub const SUMMARY: &str = "mitra.summary";
}
