use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::RapportError;

/// The fixed reaction vocabulary. Declaration order is the tie-break
/// order for the dominant reaction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReactionKind {
    Love,
    Sad,
    HeartEyes,
    Angry,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 4] = [
        ReactionKind::Love,
        ReactionKind::Sad,
        ReactionKind::HeartEyes,
        ReactionKind::Angry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Love => "love",
            ReactionKind::Sad => "sad",
            ReactionKind::HeartEyes => "heart_eyes",
            ReactionKind::Angry => "angry",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = RapportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReactionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                RapportError::invalid(format!(
                    "unknown reaction '{s}': must be love, sad, heart_eyes, or angry"
                ))
            })
    }
}

/// An ephemeral story posted by a companion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Story {
    pub id: String,
    pub companion_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// A user's reaction to one slide of a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoryReaction {
    pub id: String,
    pub user_id: String,
    pub story_id: String,
    pub media_id: String,
    pub reaction: ReactionKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecentReaction {
    pub reaction: ReactionKind,
    pub reacted_at: DateTime<Utc>,
}

/// Reaction counts for a user-companion pair. `counts` always carries
/// every kind of the vocabulary, zeros included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReactionSummary {
    pub total: u64,
    pub counts: BTreeMap<ReactionKind, u64>,
    pub recent: Vec<RecentReaction>,
    pub dominant_emotion: Option<ReactionKind>,
}
