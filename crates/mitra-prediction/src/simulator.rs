//! Monte Carlo simulation over a resampled series with an exponential rank prior.
//!
//! A trial draws `N` exponential weights, min-max normalizes them, and turns
//! each into a rank `floor(w * (N - 1)) + 1`. Rank 1 picks the most recent
//! period and rank `N` the oldest, so the exponential prior favours recent
//! activity. The trial sample is one normal draw around the mean and
//! population standard deviation of the picked values.

use mitra_core::config::PredictionConfig;
use mitra_core::errors::{MitraResult, PredictionError};
use mitra_core::models::FrequencySeries;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

use crate::sampling::{sample_exponential, sample_normal};

/// One synthetic mean value produced by a trial.
pub type SimulationSample = f64;

/// Run `n_trials` trials sequentially with the supplied random source.
pub fn simulate<R: Rng + ?Sized>(
    series: &FrequencySeries,
    n_trials: usize,
    scale: f64,
    rng: &mut R,
) -> MitraResult<Vec<SimulationSample>> {
    validate(series, n_trials, scale)?;
    let values = series.values();
    Ok((0..n_trials).map(|_| run_trial(&values, scale, rng)).collect())
}

/// Run `n_trials` trials on the rayon pool. Trial `i` uses its own generator
/// seeded with `seed_base + i`, so results depend only on `seed_base`.
pub fn simulate_parallel(
    series: &FrequencySeries,
    n_trials: usize,
    scale: f64,
    seed_base: u64,
) -> MitraResult<Vec<SimulationSample>> {
    validate(series, n_trials, scale)?;
    let values = series.values();
    Ok((0..n_trials as u64)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed_base.wrapping_add(i));
            run_trial(&values, scale, &mut rng)
        })
        .collect())
}

/// A single trial over the series values (oldest first). `values` must be non-empty.
pub fn run_trial<R: Rng + ?Sized>(values: &[f64], scale: f64, rng: &mut R) -> SimulationSample {
    let n = values.len();
    let draws: Vec<f64> = (0..n).map(|_| sample_exponential(rng, scale)).collect();

    let (min, max) = draws
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    let range = max - min;

    let converted: Vec<f64> = draws
        .iter()
        .map(|&x| {
            let normalized = if range > 0.0 { (x - min) / range } else { 0.0 };
            let rank = ((normalized * (n - 1) as f64).floor() as usize + 1).clamp(1, n);
            values[n - rank]
        })
        .collect();

    let (mean, std_dev) = mean_and_population_std(&converted);
    sample_normal(rng, mean, std_dev)
}

/// Mean and population (ddof = 0) standard deviation.
pub fn mean_and_population_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

fn validate(series: &FrequencySeries, n_trials: usize, scale: f64) -> MitraResult<()> {
    if n_trials == 0 {
        return Err(invalid("n_trials", "must be positive"));
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(invalid("scale", &format!("must be positive and finite, got {scale}")));
    }
    if series.is_empty() {
        return Err(invalid("series", "must contain at least one period"));
    }
    Ok(())
}

fn invalid(name: &str, reason: &str) -> mitra_core::MitraError {
    PredictionError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Monte Carlo simulator with configurable trial count, scale and seed.
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    n_trials: usize,
    scale: f64,
    /// Random seed for reproducibility (None = non-deterministic).
    seed: Option<u64>,
    parallel: bool,
}

impl MonteCarloSimulator {
    pub fn new(n_trials: usize, scale: f64) -> Self {
        Self {
            n_trials,
            scale,
            seed: None,
            parallel: true,
        }
    }

    pub fn from_config(config: &PredictionConfig) -> Self {
        Self {
            n_trials: config.n_trials,
            scale: config.scale,
            seed: config.seed,
            parallel: config.parallel,
        }
    }

    /// Set a deterministic seed for reproducible results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run trials sequentially instead of on the rayon pool.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Run the configured number of trials.
    pub fn run(&self, series: &FrequencySeries) -> MitraResult<Vec<SimulationSample>> {
        let _span = mitra_observability::simulation_span!(series.len(), self.n_trials).entered();
        let seed_base = self.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        if self.parallel {
            simulate_parallel(series, self.n_trials, self.scale, seed_base)
        } else {
            let mut rng = StdRng::seed_from_u64(seed_base);
            simulate(series, self.n_trials, self.scale, &mut rng)
        }
    }

    /// Run with a caller-supplied random source (always sequential).
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        series: &FrequencySeries,
        rng: &mut R,
    ) -> MitraResult<Vec<SimulationSample>> {
        simulate(series, self.n_trials, self.scale, rng)
    }
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self::from_config(&PredictionConfig::default())
    }
}
