use serde::{Deserialize, Serialize};

use super::defaults;

/// Lower bounds of the mood label bands. Scores below `neutral_from`
/// are `Distant`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodThresholds {
    pub neutral_from: f64,
    pub happy_from: f64,
    pub attached_from: f64,
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self {
            neutral_from: defaults::DEFAULT_NEUTRAL_FROM,
            happy_from: defaults::DEFAULT_HAPPY_FROM,
            attached_from: defaults::DEFAULT_ATTACHED_FROM,
        }
    }
}

/// Mood and relationship deltas applied by one interaction event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventDeltas {
    pub mood: f64,
    pub relationship: f64,
}

/// Scoring rule configuration: initial state, decay rate, label bands, event deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Mood score of a freshly created relationship.
    pub initial_mood: f64,
    /// Relationship score of a freshly created relationship.
    pub initial_relationship: f64,
    /// Mood points lost per hour of inactivity.
    pub mood_decay_per_hour: f64,
    pub thresholds: MoodThresholds,
    pub chat_turn: EventDeltas,
    pub story_reaction: EventDeltas,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            initial_mood: defaults::DEFAULT_MOOD_SCORE,
            initial_relationship: defaults::DEFAULT_RELATIONSHIP_SCORE,
            mood_decay_per_hour: defaults::DEFAULT_MOOD_DECAY_PER_HOUR,
            thresholds: MoodThresholds::default(),
            chat_turn: EventDeltas {
                mood: defaults::DEFAULT_CHAT_MOOD_DELTA,
                relationship: defaults::DEFAULT_CHAT_RELATIONSHIP_DELTA,
            },
            story_reaction: EventDeltas {
                mood: defaults::DEFAULT_REACTION_MOOD_DELTA,
                relationship: defaults::DEFAULT_REACTION_RELATIONSHIP_DELTA,
            },
        }
    }
}
