use serde::{Deserialize, Serialize};

use super::defaults;

/// Insights and conversation-context configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Days of mood snapshots included in the mood history.
    pub mood_history_days: u32,
    /// Number of recent reactions in a reaction summary.
    pub recent_reactions: usize,
    /// Number of prior turns handed to the reply generator.
    pub conversation_history: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            mood_history_days: defaults::DEFAULT_MOOD_HISTORY_DAYS,
            recent_reactions: defaults::DEFAULT_RECENT_REACTIONS,
            conversation_history: defaults::DEFAULT_CONVERSATION_HISTORY,
        }
    }
}
