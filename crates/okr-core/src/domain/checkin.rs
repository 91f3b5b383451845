//! Check-in observations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single periodic observation recorded against a key result.
///
/// Check-ins may override the key result's target and floor for their own
/// scoring (the values the goal had when the check-in was filled in), and
/// carry the percentage that was stored at write time so callers can fall
/// back to it when a live recomputation is not possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinRecord {
    /// Measured value at check-in time. For date-typed key results this is
    /// the achieved date as epoch milliseconds.
    #[serde(default)]
    pub realized: Option<f64>,

    /// Per-check-in target override. `None` falls back to the key result's
    /// own target.
    #[serde(default)]
    pub target_override: Option<f64>,

    /// Per-check-in floor override. `None` falls back to the key result's
    /// own floor.
    #[serde(default)]
    pub floor_override: Option<f64>,

    /// Percentage stored when this check-in was written.
    #[serde(default)]
    pub attainment_pct: Option<f64>,

    /// When the observation was recorded. Rollups pick the newest record.
    pub recorded_at: DateTime<Utc>,

    /// Free-form note from the person checking in.
    #[serde(default)]
    pub note: Option<String>,
}

impl CheckinRecord {
    /// Create a record with just a realized value and timestamp.
    pub fn new(realized: Option<f64>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            realized,
            target_override: None,
            floor_override: None,
            attainment_pct: None,
            recorded_at,
            note: None,
        }
    }

    /// Set the per-check-in target/floor overrides.
    pub fn with_overrides(mut self, target: Option<f64>, floor: Option<f64>) -> Self {
        self.target_override = target;
        self.floor_override = floor;
        self
    }

    /// Set the stored percentage.
    pub fn with_stored_pct(mut self, pct: f64) -> Self {
        self.attainment_pct = Some(pct);
        self
    }
}
