//! Performance color bands.
//!
//! One place for the palette/intervals shared by linear bars, circular
//! gauges, and ranking badges.

use serde::{Deserialize, Serialize};

/// Color band for a 0–100+ attainment percentage.
///
/// Bands are 20 points wide with inclusive upper bounds; anything above 100
/// (possible on the uncapped decrease branch) gets its own band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// 0–20%.
    Critical,
    /// 20–40%.
    Poor,
    /// 40–60%.
    Fair,
    /// 60–80%.
    Good,
    /// 80–100%.
    Excellent,
    /// Above 100%.
    Exceeded,
}

impl PerformanceBand {
    /// Classify a percentage into its band.
    pub fn from_pct(pct: f64) -> Self {
        if pct <= 20.0 {
            Self::Critical
        } else if pct <= 40.0 {
            Self::Poor
        } else if pct <= 60.0 {
            Self::Fair
        } else if pct <= 80.0 {
            Self::Good
        } else if pct <= 100.0 {
            Self::Excellent
        } else {
            Self::Exceeded
        }
    }

    /// Hex color used by the dashboard for this band.
    pub fn color(self) -> &'static str {
        match self {
            Self::Critical => "#FF0000",
            Self::Poor => "#FF6600",
            Self::Fair => "#FFCC00",
            Self::Good => "#99CC00",
            Self::Excellent => "#00CC00",
            Self::Exceeded => "#009900",
        }
    }
}

impl std::fmt::Display for PerformanceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Poor => write!(f, "poor"),
            Self::Fair => write!(f, "fair"),
            Self::Good => write!(f, "good"),
            Self::Excellent => write!(f, "excellent"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}
