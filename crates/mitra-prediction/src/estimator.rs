//! Resample, simulate, and count positive samples.

use chrono::{NaiveDate, Utc};
use mitra_core::config::PredictionConfig;
use mitra_core::errors::MitraResult;
use mitra_core::models::{ActivityRecord, Cadence, FrequencySeries, PurchaseProbability};
use rand::Rng;

use crate::resampler::resample_with_window;
use crate::simulator::MonteCarloSimulator;

/// Estimate the probability that future activity is positive, using today's
/// date and a fresh random seed.
pub fn estimate_purchase_probability(
    records: &[ActivityRecord],
    cadence: Cadence,
    n_trials: usize,
    scale: f64,
) -> MitraResult<PurchaseProbability> {
    let config = PredictionConfig {
        cadence,
        n_trials,
        scale,
        ..Default::default()
    };
    PurchaseProbabilityEstimator::from_config(&config).estimate(records, Utc::now().date_naive())
}

/// Composes the resampler and the Monte Carlo simulator.
#[derive(Debug, Clone)]
pub struct PurchaseProbabilityEstimator {
    cadence: Cadence,
    min_window_months: u32,
    simulator: MonteCarloSimulator,
}

impl PurchaseProbabilityEstimator {
    pub fn new(cadence: Cadence, simulator: MonteCarloSimulator) -> Self {
        Self {
            cadence,
            min_window_months: mitra_core::constants::MIN_WINDOW_MONTHS,
            simulator,
        }
    }

    pub fn from_config(config: &PredictionConfig) -> Self {
        Self {
            cadence: config.cadence,
            min_window_months: config.min_window_months,
            simulator: MonteCarloSimulator::from_config(config),
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Resample only. Exposed so callers can persist the series alongside the estimate.
    pub fn series(&self, records: &[ActivityRecord], today: NaiveDate) -> MitraResult<FrequencySeries> {
        resample_with_window(records, self.cadence, today, self.min_window_months)
    }

    pub fn estimate(
        &self,
        records: &[ActivityRecord],
        today: NaiveDate,
    ) -> MitraResult<PurchaseProbability> {
        let series = self.series(records, today)?;
        let samples = self.simulator.run(&series)?;
        Ok(PurchaseProbability::from_samples(&samples))
    }

    /// Estimate with a caller-supplied random source.
    pub fn estimate_with_rng<R: Rng + ?Sized>(
        &self,
        records: &[ActivityRecord],
        today: NaiveDate,
        rng: &mut R,
    ) -> MitraResult<PurchaseProbability> {
        let series = self.series(records, today)?;
        let samples = self.simulator.run_with_rng(&series, rng)?;
        Ok(PurchaseProbability::from_samples(&samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn weekly_records(today: NaiveDate, weeks: i64, value: f64) -> Vec<ActivityRecord> {
        (0..weeks)
            .map(|w| {
                let day = today - Duration::weeks(w);
                let ts = Utc.from_utc_datetime(&day.and_hms_opt(9, 0, 0).unwrap());
                ActivityRecord::new("m1", ts, value)
            })
            .collect()
    }

    #[test]
    fn dense_positive_history_is_certain() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        let estimator = PurchaseProbabilityEstimator::new(
            Cadence::Weekly,
            MonteCarloSimulator::new(300, 1.0).with_seed(1),
        );
        // One record every week across the whole window keeps every bucket equal.
        let p = estimator.estimate(&weekly_records(today, 40, 2.0), today).unwrap();
        assert_eq!(p.value(), 1.0);
    }

    #[test]
    fn all_zero_history_is_zero() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        let estimator = PurchaseProbabilityEstimator::new(
            Cadence::Weekly,
            MonteCarloSimulator::new(300, 1.0).with_seed(1),
        );
        let p = estimator.estimate(&weekly_records(today, 5, 0.0), today).unwrap();
        assert_eq!(p.value(), 0.0);
    }

    #[test]
    fn injected_rng_is_reproducible() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        let records = weekly_records(today, 3, 1.0);
        let estimator =
            PurchaseProbabilityEstimator::new(Cadence::Weekly, MonteCarloSimulator::new(200, 1.0));
        let a = estimator
            .estimate_with_rng(&records, today, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let b = estimator
            .estimate_with_rng(&records, today, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(a, b);
        assert!((0.0..=1.0).contains(&a.value()));
    }

    #[test]
    fn free_function_rejects_empty_records() {
        assert!(estimate_purchase_probability(&[], Cadence::Monthly, 10, 1.0).is_err());
    }
}
