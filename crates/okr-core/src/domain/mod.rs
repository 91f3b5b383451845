//! Domain models for the OKR engine.
//!
//! Canonical definitions for the transient value objects the calculators
//! operate on:
//! - `KeyResultSpec`: configuration of a key result (direction, kind, target, floor)
//! - `CheckinRecord`: a single periodic observation against a key result
//! - `TrackingPeriod`: the owning quarter's calendar window
//!
//! Nothing here is persisted by this crate; callers fetch rows from the
//! system of record and hand them in as plain values.

pub mod checkin;
pub mod error;
pub mod key_result;
pub mod period;

// Re-export main types and errors
pub use checkin::CheckinRecord;
pub use error::{OkrError, Result};
pub use key_result::{Direction, KeyResultSpec, KrKind};
pub use period::TrackingPeriod;
