use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use ts_rs::TS;

use crate::constants::{SCORE_MAX, SCORE_MIN};

/// Bound a raw score to [0, 100].
///
/// NaN collapses to the lower bound so no reader ever observes a score
/// outside the range.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return SCORE_MIN;
    }
    value.clamp(SCORE_MIN, SCORE_MAX)
}

/// Mood or relationship score clamped to [0, 100].
///
/// Deserialization goes through [`Score::new`], so out-of-range input is
/// clamped rather than trusted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(from = "f64")]
#[ts(export)]
pub struct Score(f64);

impl Score {
    /// Minimum representable score.
    pub const MIN: Score = Score(SCORE_MIN);
    /// Maximum representable score.
    pub const MAX: Score = Score(SCORE_MAX);

    /// Create a new Score, clamping to [0, 100].
    pub fn new(value: f64) -> Self {
        Self(clamp_score(value))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Apply a signed delta and clamp the result.
    pub fn adjusted(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(SCORE_MIN)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

impl Add<f64> for Score {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        self.adjusted(rhs)
    }
}
