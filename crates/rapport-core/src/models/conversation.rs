use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::relationship::MoodLabel;

/// A simulated companion the user can build a relationship with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Companion {
    pub id: String,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    /// Free-text personality description, e.g. "playful and witty".
    pub personality: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MessageRole {
    User,
    Companion,
}

impl MessageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Companion => "companion",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Message {
    pub id: String,
    pub user_id: String,
    pub companion_id: String,
    pub content: String,
    pub role: MessageRole,
    pub is_memorized: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        user_id: &str,
        companion_id: &str,
        content: impl Into<String>,
        role: MessageRole,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            companion_id: companion_id.to_string(),
            content: content.into(),
            role,
            is_memorized: false,
            created_at: now,
        }
    }
}

/// A moment the user chose to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Memory {
    pub id: String,
    pub user_id: String,
    pub companion_id: String,
    pub message_id: Option<String>,
    pub content: String,
    pub tag: Option<String>,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
}

/// Input handed to the external reply generator.
#[derive(Debug, Clone)]
pub struct ReplyRequest<'a> {
    pub companion: &'a Companion,
    pub mood_label: MoodLabel,
    pub relationship_score: Option<f64>,
    /// Prior turns, oldest first.
    pub history: &'a [Message],
}
