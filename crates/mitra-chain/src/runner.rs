//! Batch product-recommendation summaries, one chain run per mitra.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use mitra_core::constants::SUBSTITUTION_MARKER_COLUMN;
use mitra_core::errors::MitraResult;
use mitra_core::{MitraProfile, SummaryRecord, SummarySource};
use mitra_observability::{ChainRunEntry, ChainRunLog, DegradationTracker};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::invoker::{ChainInvoker, ChainRequest, ChainResponse};

/// Outcome of one batch.
#[derive(Debug, Default)]
pub struct SummaryReport {
    pub records: Vec<SummaryRecord>,
    /// Mitras whose chain ran out of attempts. Not recorded, so a later run
    /// picks them up again.
    pub exhausted: Vec<i64>,
    /// Mitras whose record could not be built.
    pub failed: Vec<(i64, String)>,
}

/// Runs the chain for many mitras in parallel and collects summary records.
pub struct SummaryRunner {
    invoker: Arc<ChainInvoker>,
    regions: Vec<String>,
    run_log: Mutex<ChainRunLog>,
    degradations: Mutex<DegradationTracker>,
}

impl SummaryRunner {
    /// Runner over `regions`. An empty list keeps every region.
    pub fn new(invoker: Arc<ChainInvoker>, regions: Vec<String>) -> Self {
        Self {
            invoker,
            regions,
            run_log: Mutex::new(ChainRunLog::new()),
            degradations: Mutex::new(DegradationTracker::new()),
        }
    }

    /// Question asked for one mitra.
    pub fn question_for(profile: &MitraProfile) -> String {
        format!(
            "Berikan produk rekomendasi untuk {} dengan mitra id {}.",
            profile.nama_mitra, profile.mitra_id
        )
    }

    /// Distinct profiles in the requested regions not yet in `processed`.
    pub fn select<'a>(
        &self,
        profiles: &'a [MitraProfile],
        processed: &HashSet<i64>,
    ) -> Vec<&'a MitraProfile> {
        let mut seen = HashSet::new();
        profiles
            .iter()
            .filter(|p| self.regions.is_empty() || self.regions.contains(&p.region_mitra))
            .filter(|p| !processed.contains(&p.mitra_id))
            .filter(|p| seen.insert((p.mitra_id, &p.nama_mitra, &p.region_mitra)))
            .collect()
    }

    /// Chain run and summary record for one mitra. `Ok(None)` when the
    /// chain was exhausted.
    pub fn summarize(
        &self,
        profile: &MitraProfile,
        snapshot_dt: NaiveDate,
    ) -> MitraResult<Option<SummaryRecord>> {
        let request = ChainRequest::for_mitra(Self::question_for(profile), profile.mitra_id);
        let response = self.invoker.invoke(&request);
        self.track(profile.mitra_id, &response);
        if response.is_exhausted() {
            return Ok(None);
        }
        to_record(profile, snapshot_dt, &response).map(Some)
    }

    /// Summaries for every selected profile.
    ///
    /// Chains block their thread while backing off, so the batch runs on its
    /// own pool with one thread and one job per mitra. A mitra waiting out a
    /// retry never holds up another mitra's chain.
    pub fn run(
        &self,
        profiles: &[MitraProfile],
        processed: &HashSet<i64>,
        snapshot_dt: NaiveDate,
    ) -> SummaryReport {
        let selected = self.select(profiles, processed);
        let _span = mitra_observability::summary_span!(selected.len()).entered();
        if selected.is_empty() {
            return SummaryReport::default();
        }

        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(selected.len())
            .thread_name(|i| format!("mitra-summary-{i}"))
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                warn!(error = %e, "summary thread pool unavailable");
                return SummaryReport {
                    failed: selected
                        .iter()
                        .map(|p| (p.mitra_id, format!("thread pool unavailable: {e}")))
                        .collect(),
                    ..SummaryReport::default()
                };
            }
        };

        let outcomes: Vec<(i64, MitraResult<Option<SummaryRecord>>)> = pool.install(|| {
            selected
                .par_iter()
                .with_max_len(1)
                .map(|p| (p.mitra_id, self.summarize(p, snapshot_dt)))
                .collect()
        });

        let mut report = SummaryReport::default();
        for (mitra_id, outcome) in outcomes {
            match outcome {
                Ok(Some(record)) => report.records.push(record),
                Ok(None) => report.exhausted.push(mitra_id),
                Err(e) => {
                    warn!(mitra_id, error = %e, "summary record failed");
                    report.failed.push((mitra_id, e.to_string()));
                }
            }
        }
        info!(
            written = report.records.len(),
            exhausted = report.exhausted.len(),
            failed = report.failed.len(),
            "summary batch finished"
        );
        report
    }

    pub fn run_log(&self) -> ChainRunLog {
        self.run_log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    pub fn degradations(&self) -> DegradationTracker {
        self.degradations
            .lock()
            .map(|tracker| tracker.clone())
            .unwrap_or_default()
    }

    fn track(&self, mitra_id: i64, response: &ChainResponse) {
        let state = &response.state;
        if let Ok(mut log) = self.run_log.lock() {
            log.record(ChainRunEntry::new(
                Some(mitra_id),
                state.attempt_count,
                state.used_fallback,
                !response.is_exhausted(),
                response.latency,
            ));
        }
        if state.used_fallback {
            if let Ok(mut tracker) = self.degradations.lock() {
                tracker.record_now(
                    "chain",
                    "empty_result",
                    "cluster_lookup",
                    Some(mitra_id.to_string()),
                );
            }
        }
    }
}

/// Record for a finished chain run.
pub fn to_record(
    profile: &MitraProfile,
    snapshot_dt: NaiveDate,
    response: &ChainResponse,
) -> MitraResult<SummaryRecord> {
    let source = if response.state.mentions_column(SUBSTITUTION_MARKER_COLUMN) {
        SummarySource::Substitution
    } else {
        SummarySource::GmvContribution
    };
    Ok(SummaryRecord {
        snapshot_dt,
        mitra_id: profile.mitra_id,
        nama_mitra: profile.nama_mitra.clone(),
        product_summary: response.answer.clone(),
        source,
        llm_metadata: serde_json::to_string(&response.state)?,
    })
}
