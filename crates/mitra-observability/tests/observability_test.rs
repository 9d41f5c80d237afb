use std::time::Duration;

use chrono::Utc;
use mitra_observability::tracing_setup::events::retry_notice;
use mitra_observability::tracing_setup::spans::names;
use mitra_observability::{ChainRunEntry, ChainRunLog, DegradationTracker};

#[test]
fn retry_notice_format() {
    let notice = retry_notice(2, Duration::from_secs(6), "model unavailable");
    assert_eq!(notice, "[Retry 2: Wait for 6 seconds] model unavailable");
}

#[test]
fn span_names_are_namespaced() {
    for name in [names::ESTIMATION, names::SIMULATION, names::CHAIN, names::SUMMARY] {
        assert!(name.starts_with("mitra."));
    }
}

#[test]
fn span_macros_build_spans() {
    mitra_observability::init_tracing_with_filter("debug");
    let _e = mitra_observability::estimation_span!("m1", "weekly").entered();
    let _s = mitra_observability::simulation_span!(26usize, 1000usize).entered();
    let _c = mitra_observability::chain_span!("question").entered();
    let _m = mitra_observability::summary_span!(3usize).entered();
    // Second init is a no-op.
    mitra_observability::init_tracing();
}

#[test]
fn chain_log_rates() {
    let mut log = ChainRunLog::new();
    assert_eq!(log.fallback_rate(), 0.0);
    assert_eq!(log.avg_latency(), Duration::ZERO);

    log.record(ChainRunEntry::new(Some(1), 0, false, true, Duration::from_millis(100)));
    log.record(ChainRunEntry::new(Some(2), 2, true, true, Duration::from_millis(300)));
    log.record(ChainRunEntry::new(Some(3), 10, false, false, Duration::from_millis(200)));
    log.record(ChainRunEntry::new(None, 0, true, true, Duration::from_millis(200)));

    assert_eq!(log.count(), 4);
    assert_eq!(log.total_retries(), 12);
    assert_eq!(log.fallback_rate(), 0.5);
    assert_eq!(log.answer_rate(), 0.75);
    assert_eq!(log.avg_latency(), Duration::from_millis(200));
}

#[test]
fn chain_log_ring_buffer_keeps_newest() {
    let mut log = ChainRunLog::with_capacity(2);
    for id in 0..5 {
        log.record(ChainRunEntry::new(Some(id), 0, false, true, Duration::ZERO));
    }
    let ids: Vec<_> = log.entries().iter().map(|e| e.mitra_id).collect();
    assert_eq!(ids, vec![Some(3), Some(4)]);
}

#[test]
fn degradation_tracker_filters() {
    let before = Utc::now();
    let mut tracker = DegradationTracker::new();
    tracker.record_now("chain", "empty_result", "cluster_lookup", Some("42".into()));
    tracker.record_now("model", "rate_limited", "retry", None);

    assert_eq!(tracker.events().len(), 2);
    let chain = tracker.for_component("chain");
    assert_eq!(chain.len(), 1);
    assert_eq!(chain[0].subject.as_deref(), Some("42"));
    assert_eq!(tracker.since(before).len(), 2);
}
