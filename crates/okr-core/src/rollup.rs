//! Objective- and quarter-level rollups.
//!
//! The engine scores one observation at a time; these helpers encode the
//! caller-side policies that sit directly on top of it: which check-in is
//! "current", how key-result percentages combine into an objective score,
//! and the dashboard's headline quarter number.

use crate::attainment::attainment_for_checkin;
use crate::domain::{CheckinRecord, KeyResultSpec};

/// A key result's contribution to an objective rollup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedPct {
    /// Percentage for this key result, `None` when nothing is computable.
    pub pct: Option<f64>,
    /// Relative weight. `None` counts as 1.
    pub weight: Option<f64>,
}

impl WeightedPct {
    pub fn new(pct: Option<f64>, weight: Option<f64>) -> Self {
        Self { pct, weight }
    }
}

/// The newest check-in by `recorded_at`, if any.
///
/// The engine itself has no notion of "latest"; every caller that scores a
/// key result picks the same record this way.
pub fn latest_checkin(records: &[CheckinRecord]) -> Option<&CheckinRecord> {
    records.iter().max_by_key(|r| r.recorded_at)
}

/// Current progress of a key result.
///
/// Scores the newest check-in (honoring its per-check-in overrides); when
/// that is not computable, falls back to the percentage stored on the record
/// at write time, and with no check-ins at all, to the percentage stored on
/// the key result itself.
pub fn kr_progress(spec: &KeyResultSpec, records: &[CheckinRecord]) -> Option<f64> {
    match latest_checkin(records) {
        Some(record) => attainment_for_checkin(spec, record).or(record.attainment_pct),
        None => spec.stored_percent,
    }
}

/// Weighted average of key-result percentages: `sum(pct*w) / sum(w)`,
/// weight defaulting to 1.
///
/// Entries without a percentage are skipped entirely (they contribute
/// neither value nor weight). `None` when nothing contributes.
pub fn objective_attainment(entries: &[WeightedPct]) -> Option<f64> {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for entry in entries {
        let Some(pct) = entry.pct else { continue };
        let weight = entry.weight.unwrap_or(1.0);
        weighted_sum += pct * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        None
    } else {
        Some(weighted_sum / total_weight)
    }
}

/// The dashboard's headline number: plain average of the available last
/// attainments, rounded to the nearest whole percent. 0 when empty.
pub fn quarter_progress(last_attainments: &[Option<f64>]) -> f64 {
    let values: Vec<f64> = last_attainments.iter().filter_map(|v| *v).collect();
    if values.is_empty() {
        return 0.0;
    }
    (values.iter().sum::<f64>() / values.len() as f64).round()
}
