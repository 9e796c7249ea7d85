//! UTC instants and the calendar arithmetic the boost rules need.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A UTC instant. Database `DATETIME` columns are read as UTC wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn from_naive_utc(dt: NaiveDateTime) -> Self {
        Self(dt.and_utc())
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Strictly later than `other`.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Negative when `other` is later.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    pub fn plus_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    /// The UTC calendar date of this instant.
    pub fn utc_date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// True when both instants fall on the same UTC calendar date.
    pub fn is_same_utc_day(&self, other: &Timestamp) -> bool {
        self.utc_date() == other.utc_date()
    }

    /// Calendar year and 1-indexed month in UTC.
    pub fn year_month(&self) -> (i32, u32) {
        (self.0.year(), self.0.month())
    }

    /// First day of this instant's UTC month.
    pub fn month_start(&self) -> NaiveDate {
        let date = self.utc_date();
        date.with_day(1).unwrap_or(date)
    }

    /// Elapsed time since `earlier` in fractional days.
    pub fn days_since(&self, earlier: &Timestamp) -> f64 {
        let millis = self.duration_since(earlier).num_milliseconds();
        millis as f64 / (1000.0 * 3600.0 * 24.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
    }

    #[test]
    fn now_is_between_clock_reads() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn is_after_is_strict() {
        let ts = at(2024, 3, 1, 12, 0);
        assert!(!ts.is_after(&ts));
        assert!(ts.plus_secs(1).is_after(&ts));
    }

    #[test]
    fn same_utc_day_ignores_time_of_day() {
        let morning = at(2024, 3, 1, 0, 0);
        let night = at(2024, 3, 1, 23, 59);
        assert!(morning.is_same_utc_day(&night));
    }

    #[test]
    fn same_utc_day_rejects_adjacent_days() {
        let late = at(2024, 3, 1, 23, 59);
        let early = at(2024, 3, 2, 0, 0);
        assert!(!late.is_same_utc_day(&early));
    }

    #[test]
    fn same_utc_day_compares_year_and_month_too() {
        let a = at(2024, 3, 1, 10, 0);
        let b = at(2023, 3, 1, 10, 0);
        assert!(!a.is_same_utc_day(&b));
    }

    #[test]
    fn month_start_returns_first_of_month() {
        let ts = at(2026, 10, 16, 8, 30);
        assert_eq!(ts.month_start(), NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert_eq!(ts.year_month(), (2026, 10));
    }

    #[test]
    fn from_naive_utc_keeps_wall_clock() {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let ts = Timestamp::from_naive_utc(naive);
        assert_eq!(ts.as_datetime().to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn days_since_is_fractional() {
        let start = at(2024, 1, 1, 0, 0);
        let later = at(2024, 1, 2, 12, 0);
        assert!((later.days_since(&start) - 1.5).abs() < f64::EPSILON);
        assert!(start.days_since(&later) < 0.0);
    }

    #[test]
    fn deserializes_rfc3339() {
        let json = "\"2024-01-15T10:30:00Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();
        assert_eq!(ts.year_month(), (2024, 1));
    }
}
