//! OKR Engine Core Library
//!
//! The canonical calculation core for key-result tracking: attainment
//! scoring, deadline decay for date-typed key results, linear end-of-period
//! forecasting, and the rollup policies sitting directly on top.
//!
//! Every calculator is a pure, total function: callers fetch rows from the
//! system of record and hand in plain values; insufficient data comes back
//! as the not-computable sentinel (`None`), degenerate math as a defined 0,
//! never as an error.

pub mod attainment;
pub mod deadline;
pub mod domain;
pub mod forecast;
pub mod obs;
pub mod performance;
pub mod rollup;
pub mod telemetry;

pub use attainment::{attainment_for_checkin, compute_attainment};
pub use deadline::{compute_deadline_progress, DateInput};
pub use domain::{
    CheckinRecord, Direction, KeyResultSpec, KrKind, OkrError, Result, TrackingPeriod,
};
pub use forecast::{compute_forecast, compute_forecast_at, ForecastResult, ForecastStatus};
pub use performance::PerformanceBand;
pub use rollup::{kr_progress, latest_checkin, objective_attainment, quarter_progress, WeightedPct};

pub use obs::{emit_checkin_scored, emit_forecast_classified, emit_objective_rolled_up};
pub use telemetry::init_tracing;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
