//! Key result attainment scoring.
//!
//! The one canonical implementation of the realized-value → percentage
//! mapping. Dashboards, check-in forms, and rankings all call in here
//! rather than re-deriving the formula.
//!
//! The function is total: malformed or missing inputs degrade to the
//! not-computable sentinel (`None`, render as "no data") or to a defined
//! zero (degenerate math, render as 0%) — never an error.

use crate::deadline::{compute_deadline_progress, DateInput};
use crate::domain::{CheckinRecord, KeyResultSpec, KrKind};

/// Direction family recognized by the scoring rules.
enum Family {
    Increase,
    Decrease,
    Unrecognized,
}

fn direction_family(raw: Option<&str>) -> Family {
    match raw.map(str::trim) {
        // Absent or empty text defaults to the increase rules.
        None | Some("") => Family::Increase,
        Some("increase") | Some("maior-é-melhor") => Family::Increase,
        Some("decrease") | Some("menor-é-melhor") => Family::Decrease,
        Some(_) => Family::Unrecognized,
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Compute the 0–100 attainment percentage for a key result.
///
/// * `realized` — measured value at check-in time; epoch milliseconds for
///   date-typed key results.
/// * `floor` — minimum-budget floor, below which attainment is 0; for
///   date-typed key results, the limit (hard-deadline) date. Optional.
/// * `target` — the goal value or goal date.
/// * `direction` — stored direction text. Absent/empty defaults to
///   `increase`; a non-empty string outside both direction families scores 0.
/// * `kind` — value kind; [`KrKind::Date`] routes through
///   [`compute_deadline_progress`], with the target date doubling as the
///   limit when no floor is configured.
///
/// Returns `None` (not computable — render as "no data", not 0%) when
/// `target` or `realized` is absent or non-finite. The decrease branch
/// is floored at 0 but intentionally not capped at 100; see the repository
/// design notes before changing that.
pub fn compute_attainment(
    realized: Option<f64>,
    floor: Option<f64>,
    target: Option<f64>,
    direction: Option<&str>,
    kind: KrKind,
) -> Option<f64> {
    let target = finite(target)?;

    if kind.is_date() {
        let achieved = finite(realized)?;
        let limit = finite(floor).unwrap_or(target);
        return compute_deadline_progress(
            DateInput::Timestamp(target as i64),
            DateInput::Timestamp(limit as i64),
            DateInput::Timestamp(achieved as i64),
        );
    }

    let realized = finite(realized)?;
    let floor = finite(floor);

    match direction_family(direction) {
        Family::Increase => Some(increase_attainment(realized, floor, target)),
        Family::Decrease => Some(decrease_attainment(realized, target)),
        Family::Unrecognized => Some(0.0),
    }
}

/// Increase rules: more is better.
fn increase_attainment(realized: f64, floor: Option<f64>, target: f64) -> f64 {
    if let Some(floor) = floor {
        if realized >= target {
            return 100.0;
        }
        if realized < floor {
            return 0.0;
        }

        let denominator = target - floor;
        if denominator == 0.0 {
            return 0.0;
        }
        (((realized - floor) / denominator) * 100.0).clamp(0.0, 100.0)
    } else {
        // No floor configured: simple ratio against the target.
        if target == 0.0 {
            return 0.0;
        }
        ((realized / target) * 100.0).clamp(0.0, 100.0)
    }
}

/// Decrease rules: less is better. 100 at or under the target, linear decay
/// past it, floored at 0 and uncapped above 100.
fn decrease_attainment(realized: f64, target: f64) -> f64 {
    if realized <= target {
        return 100.0;
    }
    if target == 0.0 {
        return 0.0;
    }
    (((2.0 * target - realized) / target) * 100.0).max(0.0)
}

/// Attainment of a single check-in, applying its per-check-in target/floor
/// overrides over the key result's own configuration.
pub fn attainment_for_checkin(spec: &KeyResultSpec, record: &CheckinRecord) -> Option<f64> {
    let target = record.target_override.or(spec.target);
    let floor = record.floor_override.or(spec.floor);
    compute_attainment(
        record.realized,
        floor,
        target,
        spec.direction.as_deref(),
        spec.kind,
    )
}
