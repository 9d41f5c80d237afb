//! Criterion benchmarks for mitra-prediction.
//!
//! - 1000 trials over a 26-week series, sequential vs rayon
//! - full estimate over two years of weekly records

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mitra_core::models::{ActivityRecord, Cadence, FrequencySeries};
use mitra_prediction::{simulate, simulate_parallel, MonteCarloSimulator, PurchaseProbabilityEstimator};

fn weekly_series(len: usize) -> FrequencySeries {
    let values: Vec<f64> = (0..len).map(|i| (i % 5) as f64).collect();
    FrequencySeries::from_values(
        Cadence::Weekly,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        &values,
    )
}

fn bench_simulate(c: &mut Criterion) {
    let series = weekly_series(26);
    c.bench_function("simulate_sequential_1000", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| simulate(&series, 1000, 1.0, &mut rng).unwrap())
    });
    c.bench_function("simulate_parallel_1000", |b| {
        b.iter(|| simulate_parallel(&series, 1000, 1.0, 42).unwrap())
    });
}

fn bench_estimate(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
    let records: Vec<ActivityRecord> = (0..730)
        .map(|d| {
            let day = today - Duration::days(d);
            ActivityRecord::new(
                "bench",
                Utc.from_utc_datetime(&day.and_hms_opt(8, 0, 0).unwrap()),
                (d % 3) as f64,
            )
        })
        .collect();
    let estimator = PurchaseProbabilityEstimator::new(
        Cadence::Weekly,
        MonteCarloSimulator::new(1000, 1.0).with_seed(7),
    );
    c.bench_function("estimate_two_years_weekly", |b| {
        b.iter(|| estimator.estimate(&records, today).unwrap())
    });
}

criterion_group!(benches, bench_simulate, bench_estimate);
criterion_main!(benches);
