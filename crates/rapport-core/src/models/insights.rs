use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::relationship::MoodLabel;

/// One day's mood, as last written that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodSnapshot {
    pub date: NaiveDate,
    pub mood_score: f64,
    pub mood_label: MoodLabel,
}

/// Consecutive-day interaction streaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StreakInfo {
    pub current: u32,
    pub longest: u32,
}

/// A catalog achievement evaluated fresh on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Milestone {
    pub key: String,
    pub title: String,
    pub description: String,
    pub achieved: bool,
}

/// Raw aggregates as read from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversationStats {
    pub message_count: u64,
    pub memory_count: u64,
    pub first_message_at: Option<DateTime<Utc>>,
}

/// Aggregates surfaced to the client, with `days_together` derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InsightStats {
    pub total_messages: u64,
    pub total_memories: u64,
    pub first_message: Option<DateTime<Utc>>,
    pub days_together: u32,
}

/// Full analytics payload for one user-companion pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanionInsights {
    pub mood_history: Vec<MoodSnapshot>,
    pub streak: StreakInfo,
    pub milestones: Vec<Milestone>,
    pub stats: InsightStats,
}
