//! Tracing setup: subscriber initialization, span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use mitra_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "MITRA_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with human-readable output.
///
/// Reads `MITRA_LOG` for per-target levels, e.g.
/// `MITRA_LOG=mitra_chain=debug,mitra_prediction=info`.
/// Falls back to `info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize from config. `MITRA_LOG` still wins over `log_level` when set.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // A subscriber installed elsewhere (e.g. by a test harness) takes precedence.
        let _ = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}
