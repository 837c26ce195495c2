use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::score::Score;

/// The persisted emotional state between one user and one companion.
///
/// Exactly one exists per (user, companion) pair. The stored `mood_score`
/// is the last event-driven baseline; readers see it through decay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RelationshipState {
    pub id: String,
    pub user_id: String,
    pub companion_id: String,
    pub mood_score: Score,
    pub relationship_score: Score,
    /// Anchor for mood decay. Moves to "now" on every interaction event.
    pub last_interaction_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RelationshipState {
    /// Build a fresh state for a pair, anchored at `now`.
    pub fn new(
        user_id: impl Into<String>,
        companion_id: impl Into<String>,
        mood: f64,
        relationship: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            companion_id: companion_id.into(),
            mood_score: Score::new(mood),
            relationship_score: Score::new(relationship),
            last_interaction_at: now,
            updated_at: now,
        }
    }
}

/// Discrete mood band derived from a mood score. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MoodLabel {
    Distant,
    Neutral,
    Happy,
    Attached,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 4] = [
        MoodLabel::Distant,
        MoodLabel::Neutral,
        MoodLabel::Happy,
        MoodLabel::Attached,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoodLabel::Distant => "Distant",
            MoodLabel::Neutral => "Neutral",
            MoodLabel::Happy => "Happy",
            MoodLabel::Attached => "Attached",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relationship state as observed by a reader: mood decayed to the
/// moment of the read, with its label attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RelationshipView {
    #[serde(flatten)]
    pub state: RelationshipState,
    pub mood_label: MoodLabel,
}
