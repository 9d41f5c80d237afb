use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Cadence;

/// Purchase-probability estimation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Resampling cadence: "weekly" or "monthly".
    pub cadence: Cadence,
    /// Monte Carlo trials per estimate.
    pub n_trials: usize,
    /// Scale (mean) of the exponential rank prior.
    pub scale: f64,
    /// Minimum analysis window in whole months.
    pub min_window_months: u32,
    /// Seed for reproducible runs. `None` draws a fresh seed per estimate.
    pub seed: Option<u64>,
    /// Run trials on the rayon pool.
    pub parallel: bool,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            cadence: Cadence::Weekly,
            n_trials: defaults::DEFAULT_N_TRIALS,
            scale: defaults::DEFAULT_EXPONENTIAL_SCALE,
            min_window_months: defaults::DEFAULT_MIN_WINDOW_MONTHS,
            seed: None,
            parallel: defaults::DEFAULT_PARALLEL_TRIALS,
        }
    }
}
