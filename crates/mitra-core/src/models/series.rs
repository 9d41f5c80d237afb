use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Cadence;

/// One bucket of a resampled series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub period_start: NaiveDate,
    pub value: f64,
}

/// Equally spaced, zero-filled activity series, ordered oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencySeries {
    pub cadence: Cadence,
    pub points: Vec<SeriesPoint>,
}

impl FrequencySeries {
    pub fn new(cadence: Cadence, points: Vec<SeriesPoint>) -> Self {
        Self { cadence, points }
    }

    /// Build a contiguous series from bare values, the first one placed in
    /// the period containing `start`.
    pub fn from_values(cadence: Cadence, start: NaiveDate, values: &[f64]) -> Self {
        let mut points = Vec::with_capacity(values.len());
        let mut period_start = cadence.period_start(start);
        for &value in values {
            points.push(SeriesPoint {
                period_start,
                value,
            });
            match cadence.next(period_start) {
                Some(next) => period_start = next,
                None => break,
            }
        }
        Self { cadence, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn first_period(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.period_start)
    }

    pub fn last_period(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.period_start)
    }

    /// True when each point starts exactly one cadence step after the previous.
    pub fn is_contiguous(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| self.cadence.next(w[0].period_start) == Some(w[1].period_start))
    }
}
