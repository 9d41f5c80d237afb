//! PredictionEngine: per-entity purchase probabilities over an activity reader.

use chrono::NaiveDate;
use mitra_core::config::PredictionConfig;
use mitra_core::errors::MitraResult;
use mitra_core::models::PurchaseProbability;
use mitra_core::traits::IActivityReader;
use rayon::prelude::*;

use crate::estimator::PurchaseProbabilityEstimator;

/// Estimates purchase probability for entities stored behind `R`.
pub struct PredictionEngine<R: IActivityReader> {
    reader: R,
    estimator: PurchaseProbabilityEstimator,
}

impl<R: IActivityReader> PredictionEngine<R> {
    pub fn new(reader: R, config: &PredictionConfig) -> Self {
        Self {
            reader,
            estimator: PurchaseProbabilityEstimator::from_config(config),
        }
    }

    pub fn with_estimator(reader: R, estimator: PurchaseProbabilityEstimator) -> Self {
        Self { reader, estimator }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Estimate one entity.
    pub fn estimate(&self, entity_id: &str, today: NaiveDate) -> MitraResult<PurchaseProbability> {
        let _span =
            mitra_observability::estimation_span!(entity_id, self.estimator.cadence()).entered();
        let records = self.reader.read_activity(entity_id)?;
        let probability = self.estimator.estimate(&records, today)?;
        mitra_observability::tracing_setup::events::estimate_completed(
            entity_id,
            records.len(),
            probability.value(),
        );
        Ok(probability)
    }

    /// Estimate every entity the reader knows about, in parallel.
    /// Per-entity failures are returned alongside successes.
    pub fn estimate_all(
        &self,
        today: NaiveDate,
    ) -> MitraResult<Vec<(String, MitraResult<PurchaseProbability>)>> {
        let ids = self.reader.entity_ids()?;
        Ok(ids
            .into_par_iter()
            .map(|id| {
                let result = self.estimate(&id, today);
                if let Err(e) = &result {
                    tracing::warn!(entity_id = %id, error = %e, "purchase probability estimate failed");
                }
                (id, result)
            })
            .collect())
    }
}
