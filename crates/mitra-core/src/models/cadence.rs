use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed resampling frequency. Buckets are keyed by period start:
/// ISO Monday for weekly, first day of the month for monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Weekly,
    Monthly,
}

impl Cadence {
    /// Start of the period containing `date`.
    pub fn period_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Cadence::Weekly => {
                let offset = u64::from(date.weekday().num_days_from_monday());
                date.checked_sub_days(Days::new(offset)).unwrap_or(date)
            }
            Cadence::Monthly => date.with_day(1).unwrap_or(date),
        }
    }

    /// Start of the period following the one that starts at `period_start`.
    /// `None` past the end of the calendar.
    pub fn next(self, period_start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Cadence::Weekly => period_start.checked_add_days(Days::new(7)),
            Cadence::Monthly => period_start.checked_add_months(Months::new(1)),
        }
    }

    /// Every period start from the period containing `from` through the
    /// period containing `to`, inclusive. Empty when `from > to`.
    pub fn period_range(self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let last = self.period_start(to);
        let mut current = self.period_start(from);
        let mut periods = Vec::new();
        while current <= last {
            periods.push(current);
            match self.next(current) {
                Some(next) => current = next,
                None => break,
            }
        }
        periods
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cadence::Weekly => "weekly",
            Cadence::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of complete calendar months from `start` to `end`.
/// Negative when `end` precedes `start`.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut months = i64::from(end.year() - start.year()) * 12 + i64::from(end.month())
        - i64::from(start.month());
    if months > 0 && end.day() < start.day() {
        months -= 1;
    } else if months < 0 && end.day() > start.day() {
        months += 1;
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekly_period_start_is_monday() {
        // 2024-03-14 is a Thursday.
        assert_eq!(Cadence::Weekly.period_start(d(2024, 3, 14)), d(2024, 3, 11));
        assert_eq!(Cadence::Weekly.period_start(d(2024, 3, 11)), d(2024, 3, 11));
        assert_eq!(Cadence::Weekly.period_start(d(2024, 3, 17)), d(2024, 3, 11));
    }

    #[test]
    fn monthly_period_start_is_first_day() {
        assert_eq!(Cadence::Monthly.period_start(d(2024, 2, 29)), d(2024, 2, 1));
    }

    #[test]
    fn period_range_is_inclusive() {
        let weeks = Cadence::Weekly.period_range(d(2024, 1, 3), d(2024, 1, 22));
        assert_eq!(weeks, vec![d(2024, 1, 1), d(2024, 1, 8), d(2024, 1, 15), d(2024, 1, 22)]);

        let months = Cadence::Monthly.period_range(d(2023, 11, 30), d(2024, 2, 1));
        assert_eq!(months, vec![d(2023, 11, 1), d(2023, 12, 1), d(2024, 1, 1), d(2024, 2, 1)]);
    }

    #[test]
    fn period_range_empty_when_reversed() {
        assert!(Cadence::Monthly.period_range(d(2024, 5, 1), d(2024, 3, 1)).is_empty());
    }

    #[test]
    fn whole_months_counts_complete_months() {
        assert_eq!(whole_months_between(d(2024, 1, 15), d(2024, 7, 15)), 6);
        assert_eq!(whole_months_between(d(2024, 1, 15), d(2024, 7, 14)), 5);
        assert_eq!(whole_months_between(d(2022, 1, 1), d(2024, 1, 1)), 24);
        assert_eq!(whole_months_between(d(2024, 1, 1), d(2024, 1, 31)), 0);
    }

    #[test]
    fn cadence_parses_lowercase() {
        let c: Cadence = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(c, Cadence::Monthly);
        assert_eq!(Cadence::Weekly.to_string(), "weekly");
    }
}
