//! # mitra-prediction
//!
//! Purchase-probability estimation for mitra/product activity.
//!
//! ## Pipeline
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | Resampler | raw `ActivityRecord`s | zero-filled `FrequencySeries` spanning at least six months |
//! | Simulator | `FrequencySeries` | `n_trials` synthetic mean samples |
//! | Estimator | samples | fraction of samples `> 0` |
//!
//! Each simulation trial draws exponential rank weights, maps them onto the
//! series counting back from the most recent period, and draws one sample
//! from a normal distribution fitted to the picked values.

pub mod engine;
pub mod estimator;
pub mod resampler;
pub mod sampling;
pub mod simulator;

pub use engine::PredictionEngine;
pub use estimator::{estimate_purchase_probability, PurchaseProbabilityEstimator};
pub use resampler::{resample, resample_with_window};
pub use simulator::{simulate, simulate_parallel, MonteCarloSimulator, SimulationSample};
