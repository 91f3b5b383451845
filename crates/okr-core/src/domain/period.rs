//! Tracking period (quarter) calendar window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The calendar window a key result is tracked over, typically a quarter.
///
/// Forecasting measures elapsed time against this window. Both bounds are
/// calendar days; the window starts at local midnight of `start_date` and is
/// considered finished once the clock passes local midnight of `end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TrackingPeriod {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Whether the given day falls inside the window (inclusive bounds).
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start_date && day <= self.end_date
    }

    /// Window length in whole days. Zero for a degenerate single-day window.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
