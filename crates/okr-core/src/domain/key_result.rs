//! Key result configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which way a key result's realized value is supposed to move.
///
/// `Increase` means higher is better (revenue, signups); `Decrease` means
/// lower is better (churn, cost). Stored direction text also appears in the
/// Portuguese spellings `maior-é-melhor` / `menor-é-melhor`; both are
/// first-class synonyms here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Increase,
    Decrease,
}

impl Direction {
    /// Parse stored direction text. Absent, empty, or unrecognized text
    /// defaults to `Increase`.
    ///
    /// Note that [`compute_attainment`](crate::compute_attainment) inspects
    /// the raw text itself: a non-empty string outside both direction
    /// families scores 0 there rather than silently defaulting. Use this
    /// parse only where the lossy default is wanted (display, sorting).
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("decrease") | Some("menor-é-melhor") => Self::Decrease,
            _ => Self::Increase,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increase => write!(f, "increase"),
            Self::Decrease => write!(f, "decrease"),
        }
    }
}

/// Value kind of a key result.
///
/// `Date` routes attainment through the deadline-decay calculator; all other
/// kinds share the numeric formula and only differ in how the UI formats the
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KrKind {
    #[default]
    Number,
    Percentage,
    Currency,
    /// Deadline-typed key result. Stored rows also carry the Portuguese
    /// spelling `data`.
    #[serde(alias = "data")]
    Date,
}

impl KrKind {
    /// Parse stored kind text. Absent or unrecognized text defaults to
    /// `Number` (the numeric formula), matching how the system of record
    /// treats legacy rows.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("percentage") => Self::Percentage,
            Some("currency") => Self::Currency,
            Some("date") | Some("data") => Self::Date,
            _ => Self::Number,
        }
    }

    /// Whether attainment for this kind is computed from calendar dates.
    pub fn is_date(self) -> bool {
        matches!(self, Self::Date)
    }
}

impl std::fmt::Display for KrKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Percentage => write!(f, "percentage"),
            Self::Currency => write!(f, "currency"),
            Self::Date => write!(f, "date"),
        }
    }
}

/// Configuration of a single key result, as fetched from the system of
/// record.
///
/// `direction` is kept as the raw stored text (optional) because the
/// attainment engine distinguishes absent/empty (defaults to increase) from
/// a recognized-family miss (scores 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResultSpec {
    /// Unique identifier for this key result.
    pub id: Uuid,

    /// Human-readable title.
    pub title: String,

    /// Stored direction text (`increase`, `decrease`, or the Portuguese
    /// synonyms). `None` defaults to increase.
    #[serde(default)]
    pub direction: Option<String>,

    /// Value kind.
    #[serde(rename = "type", default)]
    pub kind: KrKind,

    /// Goal value. Attainment is not computable without it.
    #[serde(default)]
    pub target: Option<f64>,

    /// Minimum-budget floor below which attainment is 0. For date-typed key
    /// results this is the limit (hard-deadline) date as epoch milliseconds.
    #[serde(default)]
    pub floor: Option<f64>,

    /// Starting value at the beginning of the period, used by forecasting.
    #[serde(default)]
    pub baseline: Option<f64>,

    /// Relative weight in objective-level rollups. `None` counts as 1.
    #[serde(default)]
    pub weight: Option<f64>,

    /// Percentage previously stored on the row, used as a fallback when no
    /// check-in exists yet.
    #[serde(default)]
    pub stored_percent: Option<f64>,
}

impl KeyResultSpec {
    /// Create a spec with the given title and target; remaining fields start
    /// empty/default.
    pub fn new(title: impl Into<String>, target: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            direction: None,
            kind: KrKind::default(),
            target,
            floor: None,
            baseline: None,
            weight: None,
            stored_percent: None,
        }
    }

    /// Set the stored direction text.
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    /// Set the value kind.
    pub fn with_kind(mut self, kind: KrKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the minimum-budget floor.
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Set the rollup weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}
