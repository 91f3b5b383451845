//! Linear end-of-period forecasting for key results.
//!
//! Extrapolates the rate observed so far across the full tracking window and
//! classifies the projection as on-track / at-risk / off-track. The
//! projection is advisory trend display; it never feeds back into stored
//! attainment.

use chrono::{Local, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::{Direction, TrackingPeriod};

/// Risk classification of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastStatus {
    /// Projected attainment >= 90%.
    OnTrack,
    /// Projected attainment in [60%, 90%).
    AtRisk,
    /// Projected attainment below 60%.
    OffTrack,
    /// Not enough data or the window does not allow a projection.
    NotApplicable,
}

impl ForecastStatus {
    /// Whether this status carries an actual projection the UI can chart.
    pub fn is_actionable(self) -> bool {
        self != Self::NotApplicable
    }
}

impl std::fmt::Display for ForecastStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnTrack => write!(f, "on_track"),
            Self::AtRisk => write!(f, "at_risk"),
            Self::OffTrack => write!(f, "off_track"),
            Self::NotApplicable => write!(f, "not_applicable"),
        }
    }
}

/// Outcome of a forecast computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub status: ForecastStatus,
    pub projected_value: f64,
    pub message: String,
}

impl ForecastResult {
    fn not_applicable(projected_value: f64, message: &str) -> Self {
        Self {
            status: ForecastStatus::NotApplicable,
            projected_value,
            message: message.to_string(),
        }
    }
}

/// Forecast a key result's end-of-period value using the wall clock.
///
/// See [`compute_forecast_at`] for the deterministic core and the full rules.
pub fn compute_forecast(
    baseline: Option<f64>,
    target: Option<f64>,
    current: f64,
    direction: Option<&str>,
    period: &TrackingPeriod,
) -> ForecastResult {
    compute_forecast_at(
        baseline,
        target,
        current,
        direction,
        period,
        Local::now().naive_local(),
    )
}

/// Forecast a key result's end-of-period value as of `now`.
///
/// Degraded outcomes (all `NotApplicable`, never an error):
/// * missing/non-finite baseline or target → projected 0;
/// * `now` before the window → projected 0 ("period not started");
/// * `now` past the window → projected = `current` ("period finished" — no
///   projection, just where it stopped);
/// * under 5% of the window elapsed with no movement from baseline →
///   projected 0 ("too recent to forecast"); the same applies at the exact
///   first instant of the window, where no rate exists yet;
/// * a zero-length window → projected = `current`.
///
/// Otherwise the observed rate is extrapolated linearly:
/// `projected = baseline + (current - baseline) / time_progress`, and the
/// projection's attainment against the baseline→target span is classified
/// unclamped: >= 90 on-track, >= 60 at-risk, else off-track. An inverted
/// span (target on the wrong side of baseline for the direction) scores 0.
pub fn compute_forecast_at(
    baseline: Option<f64>,
    target: Option<f64>,
    current: f64,
    direction: Option<&str>,
    period: &TrackingPeriod,
    now: NaiveDateTime,
) -> ForecastResult {
    let (Some(baseline), Some(target)) = (finite(baseline), finite(target)) else {
        return ForecastResult::not_applicable(0.0, "insufficient data to forecast");
    };

    let start = period.start_date.and_time(NaiveTime::MIN);
    let end = period.end_date.and_time(NaiveTime::MIN);

    if now < start {
        return ForecastResult::not_applicable(0.0, "period not started");
    }
    if now > end {
        return ForecastResult::not_applicable(current, "period finished");
    }

    let total_ms = (end - start).num_milliseconds() as f64;
    if total_ms <= 0.0 {
        return ForecastResult::not_applicable(current, "period window is empty");
    }

    let elapsed_ms = (now - start).num_milliseconds() as f64;
    let time_progress = elapsed_ms / total_ms;

    if time_progress < 0.05 && current == baseline {
        return ForecastResult::not_applicable(0.0, "too recent to forecast");
    }
    if time_progress <= 0.0 {
        // First instant of the window with movement already recorded: no
        // rate can be derived yet.
        return ForecastResult::not_applicable(0.0, "too recent to forecast");
    }

    let projected_value = baseline + (current - baseline) / time_progress;

    let attainment = match Direction::parse(direction) {
        Direction::Decrease => {
            if baseline <= target {
                0.0
            } else {
                ((baseline - projected_value) / (baseline - target)) * 100.0
            }
        }
        Direction::Increase => {
            if target <= baseline {
                0.0
            } else {
                ((projected_value - baseline) / (target - baseline)) * 100.0
            }
        }
    };

    let status = classify(attainment);
    let message = match status {
        ForecastStatus::OnTrack => "on pace to meet the target",
        ForecastStatus::AtRisk => "behind the pace needed to hit the target",
        ForecastStatus::OffTrack => "well off the pace needed to hit the target",
        ForecastStatus::NotApplicable => unreachable!("classify never yields NotApplicable"),
    };

    ForecastResult {
        status,
        projected_value,
        message: message.to_string(),
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn classify(attainment: f64) -> ForecastStatus {
    if attainment >= 90.0 {
        ForecastStatus::OnTrack
    } else if attainment >= 60.0 {
        ForecastStatus::AtRisk
    } else {
        ForecastStatus::OffTrack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn q1() -> TrackingPeriod {
        // 90-day window.
        TrackingPeriod::new(d(2026, 1, 1), d(2026, 4, 1))
    }

    fn noon(day: NaiveDate) -> NaiveDateTime {
        day.and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_baseline_or_target_not_applicable() {
        let r = compute_forecast_at(None, Some(100.0), 40.0, None, &q1(), noon(d(2026, 2, 1)));
        assert_eq!(r.status, ForecastStatus::NotApplicable);
        assert_eq!(r.projected_value, 0.0);

        let r = compute_forecast_at(Some(0.0), None, 40.0, None, &q1(), noon(d(2026, 2, 1)));
        assert_eq!(r.status, ForecastStatus::NotApplicable);
    }

    #[test]
    fn test_before_period_not_applicable() {
        let r = compute_forecast_at(
            Some(0.0),
            Some(100.0),
            0.0,
            None,
            &q1(),
            noon(d(2025, 12, 25)),
        );
        assert_eq!(r.status, ForecastStatus::NotApplicable);
        assert_eq!(r.projected_value, 0.0);
        assert!(r.message.contains("not started"));
    }

    #[test]
    fn test_after_period_reports_where_it_stopped() {
        let r = compute_forecast_at(
            Some(0.0),
            Some(100.0),
            72.0,
            None,
            &q1(),
            noon(d(2026, 4, 15)),
        );
        assert_eq!(r.status, ForecastStatus::NotApplicable);
        assert_eq!(r.projected_value, 72.0);
        assert!(r.message.contains("finished"));
    }

    #[test]
    fn test_too_recent_without_movement() {
        // Day 2 of 90 (~1.7% elapsed), current still at baseline.
        let r = compute_forecast_at(
            Some(10.0),
            Some(100.0),
            10.0,
            None,
            &q1(),
            noon(d(2026, 1, 2)),
        );
        assert_eq!(r.status, ForecastStatus::NotApplicable);
        assert!(r.message.contains("too recent"));
    }

    #[test]
    fn test_early_movement_still_projects() {
        // Same early instant, but the value already moved: projects.
        let r = compute_forecast_at(
            Some(10.0),
            Some(100.0),
            20.0,
            None,
            &q1(),
            noon(d(2026, 1, 2)),
        );
        assert_eq!(r.status, ForecastStatus::OnTrack);
        assert!(r.projected_value > 100.0);
    }

    #[test]
    fn test_linear_projection_on_track() {
        // 20 of 90 days elapsed, 40 of 100 done:
        // rate = 40 / (2/9) = 180 → projected 180 → attainment 180%.
        let r = compute_forecast_at(
            Some(0.0),
            Some(100.0),
            40.0,
            Some("increase"),
            &q1(),
            d(2026, 1, 21).and_hms_opt(0, 0, 0).unwrap(),
        );
        assert_eq!(r.status, ForecastStatus::OnTrack);
        assert!((r.projected_value - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_slow_pace_classifies_off_track() {
        // Half the window gone, only 20% of the span covered → projects 40%.
        let r = compute_forecast_at(
            Some(0.0),
            Some(100.0),
            20.0,
            None,
            &q1(),
            d(2026, 2, 15).and_hms_opt(0, 0, 0).unwrap(),
        );
        assert_eq!(r.status, ForecastStatus::OffTrack);
        assert!((r.projected_value - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_at_risk_band() {
        // Half the window gone, 35% covered → projects 70%.
        let r = compute_forecast_at(
            Some(0.0),
            Some(100.0),
            35.0,
            None,
            &q1(),
            d(2026, 2, 15).and_hms_opt(0, 0, 0).unwrap(),
        );
        assert_eq!(r.status, ForecastStatus::AtRisk);
    }

    #[test]
    fn test_decrease_direction_projects_downward() {
        // Churn from 10 toward 2; halfway through, at 6: on pace exactly.
        let r = compute_forecast_at(
            Some(10.0),
            Some(2.0),
            6.0,
            Some("decrease"),
            &q1(),
            d(2026, 2, 15).and_hms_opt(0, 0, 0).unwrap(),
        );
        assert_eq!(r.status, ForecastStatus::OnTrack);
        assert!((r.projected_value - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_span_scores_zero() {
        // A decrease goal whose target sits above the baseline is
        // misconfigured; the projection reads off-track.
        let r = compute_forecast_at(
            Some(2.0),
            Some(10.0),
            5.0,
            Some("decrease"),
            &q1(),
            d(2026, 2, 15).and_hms_opt(0, 0, 0).unwrap(),
        );
        assert_eq!(r.status, ForecastStatus::OffTrack);
    }

    #[test]
    fn test_status_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ForecastStatus::OnTrack).unwrap(),
            r#""on_track""#
        );
        assert_eq!(
            serde_json::to_string(&ForecastStatus::NotApplicable).unwrap(),
            r#""not_applicable""#
        );
    }

    #[test]
    fn test_empty_window_not_applicable() {
        let single = TrackingPeriod::new(d(2026, 1, 1), d(2026, 1, 1));
        let r = compute_forecast_at(
            Some(0.0),
            Some(100.0),
            50.0,
            None,
            &single,
            d(2026, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
        );
        assert_eq!(r.status, ForecastStatus::NotApplicable);
        assert_eq!(r.projected_value, 50.0);
    }
}
