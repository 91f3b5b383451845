//! Deadline decay for date-typed key results.
//!
//! Converts three calendar dates — the goal date, the hard-deadline limit,
//! and the achieved date — into a 0–100 score: full marks at or before the
//! goal date, zero at or after the limit, linear decay in between.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// A date-like input accepted by [`compute_deadline_progress`].
///
/// Callers hand in whatever the storage layer produced: a calendar day, an
/// epoch-milliseconds timestamp, or a `YYYY-MM-DD` string. Every variant is
/// normalized to local midnight before comparison; time-of-day is discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Day(NaiveDate),
    /// Epoch milliseconds, interpreted in the local timezone.
    Timestamp(i64),
    /// `YYYY-MM-DD`, or an RFC 3339 timestamp.
    Text(String),
}

impl DateInput {
    /// Normalize to the calendar day at local midnight. `None` when the
    /// input does not parse into a valid date.
    pub fn to_midnight(&self) -> Option<NaiveDate> {
        match self {
            Self::Day(day) => Some(*day),
            Self::Timestamp(ms) => DateTime::from_timestamp_millis(*ms)
                .map(|dt| dt.with_timezone(&Local).date_naive()),
            Self::Text(text) => {
                let text = text.trim();
                if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                    return Some(day);
                }
                DateTime::parse_from_rfc3339(text)
                    .ok()
                    .map(|dt| dt.with_timezone(&Local).date_naive())
            }
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(day: NaiveDate) -> Self {
        Self::Day(day)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Timestamp(dt.timestamp_millis())
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(dt: DateTime<Local>) -> Self {
        Self::Timestamp(dt.timestamp_millis())
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        Self::Timestamp(ms)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Linear deadline progress for date-typed key results.
///
/// Rules, in order:
/// 1. `target == limit` (degenerate window): `achieved <= target` → 100,
///    else 0. No decay.
/// 2. `achieved <= target` → 100 (met or beat the goal date).
/// 3. `achieved >= limit` → 0 (missed the hard deadline).
/// 4. Otherwise linear decay across the window, rounded to 2 decimals:
///    `(1 - delay_days/window_days) * 100`.
///
/// Returns `None` when any input fails to parse into a valid date. Never
/// returns a value outside [0, 100].
pub fn compute_deadline_progress<T, L, A>(target: T, limit: L, achieved: A) -> Option<f64>
where
    T: Into<DateInput>,
    L: Into<DateInput>,
    A: Into<DateInput>,
{
    let target = target.into().to_midnight()?;
    let limit = limit.into().to_midnight()?;
    let achieved = achieved.into().to_midnight()?;

    // Edge case: goal date doubles as the deadline.
    if target == limit {
        return Some(if achieved <= target { 100.0 } else { 0.0 });
    }

    if achieved <= target {
        return Some(100.0);
    }
    if achieved >= limit {
        return Some(0.0);
    }

    let window_days = (limit - target).num_days().max(1);
    let delay_days = (achieved - target).num_days();

    let progress = (1.0 - delay_days as f64 / window_days as f64).clamp(0.0, 1.0);
    Some(round2(progress * 100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
