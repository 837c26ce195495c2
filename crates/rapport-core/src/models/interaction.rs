use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// An interaction that moves the relationship baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InteractionKind {
    /// A user message was answered by the companion.
    ChatTurn,
    /// The user reacted to one of the companion's stories.
    StoryReaction,
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionKind::ChatTurn => f.write_str("chat_turn"),
            InteractionKind::StoryReaction => f.write_str("story_reaction"),
        }
    }
}
