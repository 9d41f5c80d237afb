//! Turn irregular activity records into an equally spaced, zero-filled series.

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use mitra_core::constants::MIN_WINDOW_MONTHS;
use mitra_core::errors::{MitraResult, PredictionError};
use mitra_core::models::{
    whole_months_between, ActivityRecord, Cadence, FrequencySeries, SeriesPoint,
};

/// Resample `records` at `cadence` up to `today`, guaranteeing a window of
/// at least six months.
pub fn resample(
    records: &[ActivityRecord],
    cadence: Cadence,
    today: NaiveDate,
) -> MitraResult<FrequencySeries> {
    resample_with_window(records, cadence, today, MIN_WINDOW_MONTHS)
}

/// Resample with a configurable minimum window.
///
/// Values are summed into buckets keyed by period start. The series starts
/// at the earliest bucket, unless that is at most `min_window_months` whole
/// months before `today`, in which case it starts at `today - min_window_months`.
/// It ends at the period containing `today`. Missing periods are `0`, and
/// buckets outside the index are dropped.
pub fn resample_with_window(
    records: &[ActivityRecord],
    cadence: Cadence,
    today: NaiveDate,
    min_window_months: u32,
) -> MitraResult<FrequencySeries> {
    if records.is_empty() {
        return Err(PredictionError::EmptyInput {
            what: "activity records".into(),
        }
        .into());
    }

    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        let key = cadence.period_start(record.timestamp.date_naive());
        *buckets.entry(key).or_insert(0.0) += record.value;
    }

    let mut start_dt = match buckets.keys().next() {
        Some(first) => *first,
        None => today,
    };
    if whole_months_between(start_dt, today) <= i64::from(min_window_months) {
        start_dt = today
            .checked_sub_months(Months::new(min_window_months))
            .unwrap_or(NaiveDate::MIN);
    }

    let points = cadence
        .period_range(start_dt, today)
        .into_iter()
        .map(|period_start| SeriesPoint {
            period_start,
            value: buckets.get(&period_start).copied().unwrap_or(0.0),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        records = records.len(),
        buckets = buckets.len(),
        periods = points.len(),
        cadence = %cadence,
        "activity resampled"
    );

    Ok(FrequencySeries::new(cadence, points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rec(y: i32, m: u32, day: u32, value: f64) -> ActivityRecord {
        ActivityRecord::new("m1", Utc.with_ymd_and_hms(y, m, day, 10, 0, 0).unwrap(), value)
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = resample(&[], Cadence::Weekly, d(2024, 6, 1)).unwrap_err();
        assert!(err.to_string().contains("empty input"));
    }

    #[test]
    fn recent_history_is_extended_to_six_months() {
        let today = d(2024, 7, 15);
        let series = resample(&[rec(2024, 7, 1, 3.0)], Cadence::Monthly, today).unwrap();
        // 2024-01-15 falls in January.
        assert_eq!(series.first_period(), Some(d(2024, 1, 1)));
        assert_eq!(series.last_period(), Some(d(2024, 7, 1)));
        assert_eq!(series.values(), vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0]);
    }

    #[test]
    fn long_history_starts_at_earliest_bucket() {
        let today = d(2024, 7, 15);
        let records = [rec(2023, 3, 10, 1.0), rec(2023, 3, 20, 2.0), rec(2024, 7, 2, 4.0)];
        let series = resample(&records, Cadence::Monthly, today).unwrap();
        assert_eq!(series.first_period(), Some(d(2023, 3, 1)));
        assert_eq!(series.len(), 17);
        assert_eq!(series.points[0].value, 3.0);
        assert_eq!(series.points[16].value, 4.0);
        assert!(series.is_contiguous());
    }

    #[test]
    fn weekly_buckets_sum_within_week() {
        // 2024-07-08 is a Monday.
        let today = d(2024, 7, 14);
        let records = [rec(2024, 7, 8, 1.0), rec(2024, 7, 10, 2.5), rec(2024, 7, 14, 0.5)];
        let series = resample(&records, Cadence::Weekly, today).unwrap();
        assert_eq!(series.last_period(), Some(d(2024, 7, 8)));
        assert_eq!(series.points.last().unwrap().value, 4.0);
        assert!(series.is_contiguous());
    }

    #[test]
    fn records_after_today_are_dropped() {
        let today = d(2024, 7, 15);
        let records = [rec(2024, 6, 3, 1.0), rec(2024, 9, 1, 100.0)];
        let series = resample(&records, Cadence::Monthly, today).unwrap();
        assert_eq!(series.last_period(), Some(d(2024, 7, 1)));
        assert_eq!(series.values().iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn custom_window_is_honored() {
        let today = d(2024, 7, 15);
        let series =
            resample_with_window(&[rec(2024, 7, 1, 1.0)], Cadence::Monthly, today, 2).unwrap();
        assert_eq!(series.first_period(), Some(d(2024, 5, 1)));
        assert_eq!(series.len(), 3);
    }
}
