use chrono::{DateTime, Utc};

use rapport_core::config::defaults::DEFAULT_MOOD_DECAY_PER_HOUR;

/// Linear mood decay: `max(0, mood - hoursElapsed × rate)`.
///
/// Applied to the in-memory copy on every read and never written back, so
/// repeated reads each decay from the same stored baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayFunction {
    rate_per_hour: f64,
}

impl DecayFunction {
    pub fn new(rate_per_hour: f64) -> Self {
        Self {
            rate_per_hour: rate_per_hour.max(0.0),
        }
    }

    pub fn rate_per_hour(&self) -> f64 {
        self.rate_per_hour
    }

    /// Decayed mood at `now` for a baseline anchored at `last_interaction_at`.
    pub fn apply(
        &self,
        mood_score: f64,
        last_interaction_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> f64 {
        let hours = hours_elapsed(last_interaction_at, now);
        (mood_score - hours * self.rate_per_hour).max(0.0)
    }
}

impl Default for DecayFunction {
    fn default() -> Self {
        Self::new(DEFAULT_MOOD_DECAY_PER_HOUR)
    }
}

/// Fractional hours from `from` to `to`. A `to` earlier than `from`
/// (clock skew) counts as zero.
pub fn hours_elapsed(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds().max(0) as f64 / 3_600_000.0
}
