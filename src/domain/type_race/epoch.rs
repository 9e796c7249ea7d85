//! Rotation epochs: 18-month windows counted from December 2021.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::Timestamp;

/// Calendar months per epoch.
pub const EPOCH_LENGTH_MONTHS: i64 = 18;

/// Subtracted from the raw window index so that December 2021 is epoch 0.
pub const EPOCH_OFFSET: i64 = 1348;

/// Index of an 18-month rotation window. Negative before December 2021.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RotationEpoch(i64);

impl RotationEpoch {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Epoch containing the given year and 1-indexed month.
    pub fn at(year: i32, month: u32) -> Self {
        let month_index = i64::from(year) * 12 + i64::from(month);
        Self(month_index.div_euclid(EPOCH_LENGTH_MONTHS) - EPOCH_OFFSET)
    }

    /// Epoch containing the instant's UTC year and month.
    pub fn from_timestamp(ts: &Timestamp) -> Self {
        let (year, month) = ts.year_month();
        Self::at(year, month)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RotationEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
