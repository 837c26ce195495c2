//! StoryService: reactions to a companion's stories.

use std::sync::Arc;

use rapport_core::errors::{RapportError, RapportResult};
use rapport_core::models::{InteractionKind, ReactionKind, StoryReaction};
use rapport_core::traits::{IClock, IInsightsStorage, IStoryStorage};
use rapport_observability::story_span;

use crate::relationship::RelationshipEngine;

pub struct StoryService {
    stories: Arc<dyn IStoryStorage>,
    insights: Arc<dyn IInsightsStorage>,
    relationships: Arc<RelationshipEngine>,
    clock: Arc<dyn IClock>,
}

impl StoryService {
    pub fn new(
        stories: Arc<dyn IStoryStorage>,
        insights: Arc<dyn IInsightsStorage>,
        relationships: Arc<RelationshipEngine>,
        clock: Arc<dyn IClock>,
    ) -> Self {
        Self {
            stories,
            insights,
            relationships,
            clock,
        }
    }

    /// Record a reaction, then credit it to the relationship and snapshot
    /// today's mood. The reaction kind is validated before anything is written.
    pub fn react_to_story(
        &self,
        user_id: &str,
        story_id: &str,
        media_id: &str,
        reaction: &str,
    ) -> RapportResult<StoryReaction> {
        let _span = story_span!(user_id, story_id).entered();
        let kind: ReactionKind = reaction.parse()?;

        let story = self
            .stories
            .get_story(story_id)?
            .ok_or_else(|| RapportError::StoryNotFound {
                id: story_id.to_string(),
            })?;

        let now = self.clock.now();
        let record = StoryReaction {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            story_id: story.id.clone(),
            media_id: media_id.to_string(),
            reaction: kind,
            created_at: now,
        };
        self.stories.create_reaction(&record)?;

        match self.relationships.apply_event(
            user_id,
            &story.companion_id,
            InteractionKind::StoryReaction,
        ) {
            Ok(Some(state)) => {
                if let Err(e) = self.insights.upsert_mood_snapshot(
                    user_id,
                    &story.companion_id,
                    state.mood_score.value(),
                    now.date_naive(),
                ) {
                    tracing::warn!(error = %e, "mood snapshot after reaction failed");
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "relationship update after reaction failed"),
        }

        Ok(record)
    }
}
