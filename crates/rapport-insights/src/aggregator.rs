//! InsightsAggregator: combines store reads with the pure calculators.

use std::sync::Arc;

use rapport_core::config::InsightsConfig;
use rapport_core::errors::RapportResult;
use rapport_core::models::{CompanionInsights, MoodSnapshot, ReactionSummary, RelationshipState};
use rapport_core::traits::{IClock, IInsightsStorage, IRelationshipStorage};
use rapport_observability::insights_span;
use rapport_scoring::MoodClassifier;

use crate::milestones::evaluate_milestones;
use crate::reactions::summarize_reactions;
use crate::stats::insight_stats;
use crate::streak::compute_streak;

pub struct InsightsAggregator {
    insights: Arc<dyn IInsightsStorage>,
    relationships: Arc<dyn IRelationshipStorage>,
    clock: Arc<dyn IClock>,
    classifier: MoodClassifier,
    config: InsightsConfig,
}

impl InsightsAggregator {
    pub fn new(
        insights: Arc<dyn IInsightsStorage>,
        relationships: Arc<dyn IRelationshipStorage>,
        clock: Arc<dyn IClock>,
        classifier: MoodClassifier,
        config: InsightsConfig,
    ) -> Self {
        Self {
            insights,
            relationships,
            clock,
            classifier,
            config,
        }
    }

    /// Mood history, streaks, milestones, and stats for one pair.
    ///
    /// A missing relationship state drops the state-dependent milestones.
    /// Store failures, including on the relationship read, are returned.
    pub fn get_insights(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<CompanionInsights> {
        let _span = insights_span!("insights", user_id, companion_id).entered();
        let now = self.clock.now();
        let today = now.date_naive();

        let mood_history = self
            .insights
            .get_mood_history(user_id, companion_id, self.config.mood_history_days, today)?
            .into_iter()
            .map(|(date, mood_score)| MoodSnapshot {
                date,
                mood_score,
                mood_label: self.classifier.label(mood_score),
            })
            .collect();

        let dates = self
            .insights
            .get_distinct_interaction_dates(user_id, companion_id)?;
        let streak = compute_streak(&dates, today);

        let stats = insight_stats(&self.insights.get_stats(user_id, companion_id)?, now);

        let state = self.load_state(user_id, companion_id)?;
        let milestones =
            evaluate_milestones(&stats, state.as_ref(), &self.classifier.thresholds());

        tracing::debug!(
            current_streak = streak.current,
            milestones = milestones.len(),
            "insights computed"
        );

        Ok(CompanionInsights {
            mood_history,
            streak,
            milestones,
            stats,
        })
    }

    /// Reaction counts across the whole vocabulary plus the latest reactions.
    pub fn get_reaction_summary(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<ReactionSummary> {
        let _span = insights_span!("reaction_summary", user_id, companion_id).entered();
        let counts = self.insights.get_reaction_counts(user_id, companion_id)?;
        let recent = self.insights.get_recent_reactions(
            user_id,
            companion_id,
            self.config.recent_reactions,
        )?;
        Ok(summarize_reactions(&counts, recent))
    }

    fn load_state(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<Option<RelationshipState>> {
        let state = self.relationships.get_by_pair(user_id, companion_id)?;
        if state.is_none() {
            tracing::debug!("no relationship state, omitting mood and bond milestones");
        }
        Ok(state)
    }
}
