//! Structured observability hooks for scoring lifecycle events.
//!
//! Emission functions for the moments a report or dashboard pipeline cares
//! about: a check-in scored, an objective rolled up, a forecast classified.
//! Events are emitted at `info!` level; filter with `RUST_LOG`.

use tracing::info;

/// Emit event: a check-in was scored against its key result.
pub fn emit_checkin_scored(kr_id: &str, pct: Option<f64>) {
    match pct {
        Some(pct) => info!(event = "checkin.scored", kr_id = %kr_id, pct = pct),
        None => info!(event = "checkin.scored", kr_id = %kr_id, pct = "not_computable"),
    }
}

/// Emit event: key-result percentages rolled up into an objective score.
pub fn emit_objective_rolled_up(objective_id: &str, kr_count: usize, pct: Option<f64>) {
    match pct {
        Some(pct) => info!(
            event = "objective.rolled_up",
            objective_id = %objective_id,
            kr_count = kr_count,
            pct = pct,
        ),
        None => info!(
            event = "objective.rolled_up",
            objective_id = %objective_id,
            kr_count = kr_count,
            pct = "not_computable",
        ),
    }
}

/// Emit event: a forecast was classified.
pub fn emit_forecast_classified(kr_id: &str, status: &dyn std::fmt::Display, projected: f64) {
    info!(
        event = "forecast.classified",
        kr_id = %kr_id,
        status = %status,
        projected = projected,
    );
}
