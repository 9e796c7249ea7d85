//! Validity rules shared by every time-scoped fact.
//!
//! All comparisons take the caller's `now` so a single aggregation never
//! mixes two clock readings.

use crate::domain::foundation::Timestamp;

/// True when `expiry` is strictly later than `now`. A missing expiry never
/// grants anything.
pub fn expires_after(expiry: Option<&Timestamp>, now: &Timestamp) -> bool {
    expiry.map(|e| e.is_after(now)).unwrap_or(false)
}

/// True when `ts` falls on the same UTC calendar date as `now`.
pub fn same_day(ts: Option<&Timestamp>, now: &Timestamp) -> bool {
    ts.map(|t| t.is_same_utc_day(now)).unwrap_or(false)
}

/// True when any bit of `flag` is set in `mask`.
pub fn bit_set(mask: u32, flag: u32) -> bool {
    mask & flag != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(d: u32, h: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, d, h, 0, 0).unwrap())
    }

    #[test]
    fn expiry_must_be_strictly_in_the_future() {
        let now = at(10, 12);
        assert!(expires_after(Some(&now.plus_secs(1)), &now));
        assert!(!expires_after(Some(&now), &now));
        assert!(!expires_after(Some(&now.plus_secs(-1)), &now));
        assert!(!expires_after(None, &now));
    }

    #[test]
    fn same_day_uses_utc_calendar_date() {
        let now = at(10, 12);
        assert!(same_day(Some(&at(10, 0)), &now));
        assert!(same_day(Some(&at(10, 23)), &now));
        assert!(!same_day(Some(&at(9, 23)), &now));
        assert!(!same_day(None, &now));
    }

    #[test]
    fn bit_set_checks_individual_flags() {
        assert!(bit_set(0b1011, 1));
        assert!(bit_set(0b1011, 2));
        assert!(!bit_set(0b1011, 4));
        assert!(bit_set(0b1011, 8));
        assert!(!bit_set(0, 1));
    }
}
