use chrono::NaiveDate;

use crate::errors::RapportResult;
use crate::models::{ConversationStats, ReactionKind, RecentReaction};

/// Read side of the analytics: snapshots, interaction dates, aggregates.
pub trait IInsightsStorage: Send + Sync {
    /// Insert or overwrite the snapshot for (user, companion, date).
    fn upsert_mood_snapshot(
        &self,
        user_id: &str,
        companion_id: &str,
        mood_score: f64,
        date: NaiveDate,
    ) -> RapportResult<()>;

    /// Snapshots from `today - window_days` through `today`, oldest first.
    fn get_mood_history(
        &self,
        user_id: &str,
        companion_id: &str,
        window_days: u32,
        today: NaiveDate,
    ) -> RapportResult<Vec<(NaiveDate, f64)>>;

    /// Distinct UTC days with at least one user message, most recent first.
    fn get_distinct_interaction_dates(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<Vec<NaiveDate>>;

    fn get_stats(&self, user_id: &str, companion_id: &str) -> RapportResult<ConversationStats>;

    /// Per-kind reaction counts. Kinds with no reactions may be absent.
    fn get_reaction_counts(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<Vec<(ReactionKind, u64)>>;

    /// Most recent reactions first.
    fn get_recent_reactions(
        &self,
        user_id: &str,
        companion_id: &str,
        limit: usize,
    ) -> RapportResult<Vec<RecentReaction>>;
}
