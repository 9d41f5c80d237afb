use std::time::Duration;

use chrono::NaiveDate;
use mitra_core::models::*;
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn purchase_probability_counts_strictly_positive() {
    let p = PurchaseProbability::from_samples(&[1.0, 0.0, -2.0, 3.5]);
    assert_eq!(p.value(), 0.5);
    assert_eq!(PurchaseProbability::from_samples(&[]).value(), 0.0);
}

#[test]
fn series_from_values_is_contiguous() {
    let series = FrequencySeries::from_values(Cadence::Monthly, d(2024, 1, 20), &[1.0, 2.0, 3.0]);
    assert_eq!(series.len(), 3);
    assert_eq!(series.first_period(), Some(d(2024, 1, 1)));
    assert_eq!(series.last_period(), Some(d(2024, 3, 1)));
    assert!(series.is_contiguous());
    assert_eq!(series.values(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn series_with_gap_is_not_contiguous() {
    let series = FrequencySeries::new(
        Cadence::Weekly,
        vec![
            SeriesPoint { period_start: d(2024, 1, 1), value: 1.0 },
            SeriesPoint { period_start: d(2024, 1, 15), value: 1.0 },
        ],
    );
    assert!(!series.is_contiguous());
}

#[test]
fn chain_state_starts_at_generate_query() {
    let state = ChainState::new("question", Duration::from_secs(3));
    assert_eq!(state.stage, ChainStage::GenerateQuery);
    assert_eq!(state.attempt_count, 0);
    assert!(!state.used_fallback);
    assert!(!state.stage.is_terminal());
    assert!(ChainStage::Exhausted.is_terminal());
}

#[test]
fn chain_state_serializes_delay_as_seconds() {
    let mut state = ChainState::new("q", Duration::from_secs(12));
    state.result_columns = vec!["produk_substitusi".into()];
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["retry_delay"], 12.0);
    assert_eq!(json["stage"], "generate_query");
    let back: ChainState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
    assert!(back.mentions_column("produk_substitusi"));
}

#[test]
fn summary_source_serializes_to_labels() {
    assert_eq!(
        serde_json::to_string(&SummarySource::Substitution).unwrap(),
        "\"Mystique\""
    );
    assert_eq!(
        serde_json::to_string(&SummarySource::GmvContribution).unwrap(),
        "\"GMV Contribution\""
    );
    assert_eq!(SummarySource::GmvContribution.as_str(), "GMV Contribution");
}

proptest! {
    #[test]
    fn period_start_is_idempotent_and_not_after_date(days in 0i64..20_000) {
        let date = d(1990, 1, 1) + chrono::Duration::days(days);
        for cadence in [Cadence::Weekly, Cadence::Monthly] {
            let start = cadence.period_start(date);
            prop_assert!(start <= date);
            prop_assert_eq!(cadence.period_start(start), start);
        }
    }

    #[test]
    fn probability_is_bounded(samples in prop::collection::vec(-100.0f64..100.0, 0..200)) {
        let p = PurchaseProbability::from_samples(&samples).value();
        prop_assert!((0.0..=1.0).contains(&p));
    }
}
