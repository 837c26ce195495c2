//! RelationshipEngine: create, read-with-decay, event application, listing.

use std::sync::Arc;

use rapport_core::errors::{RapportError, RapportResult};
use rapport_core::models::{InteractionKind, RelationshipState, RelationshipView};
use rapport_core::traits::{IClock, IRelationshipStorage};
use rapport_observability::{event_span, relationship_span};
use rapport_scoring::ScoringEngine;

/// Owns the relationship lifecycle for every (user, companion) pair.
///
/// Reads never write: decay is projected onto a copy of the stored
/// baseline. Events add their deltas to the stored baseline in one atomic
/// store update, so concurrent events on a pair cannot lose increments.
pub struct RelationshipEngine {
    store: Arc<dyn IRelationshipStorage>,
    scoring: ScoringEngine,
    clock: Arc<dyn IClock>,
}

fn require_ids(user_id: &str, companion_id: &str) -> RapportResult<()> {
    if user_id.trim().is_empty() || companion_id.trim().is_empty() {
        return Err(RapportError::invalid("user and companion ids are required"));
    }
    Ok(())
}

fn require_user(user_id: &str) -> RapportResult<()> {
    if user_id.trim().is_empty() {
        return Err(RapportError::invalid("user id is required"));
    }
    Ok(())
}

impl RelationshipEngine {
    pub fn new(
        store: Arc<dyn IRelationshipStorage>,
        scoring: ScoringEngine,
        clock: Arc<dyn IClock>,
    ) -> Self {
        Self {
            store,
            scoring,
            clock,
        }
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    /// Start a relationship at the configured initial scores.
    pub fn create(&self, user_id: &str, companion_id: &str) -> RapportResult<RelationshipState> {
        let _span = relationship_span!("create", user_id, companion_id).entered();
        require_ids(user_id, companion_id)?;

        let state = self
            .scoring
            .initial_state(user_id, companion_id, self.clock.now());
        self.store.create(&state)?;
        tracing::info!(state_id = %state.id, "relationship created");
        Ok(state)
    }

    /// Stored state with mood decayed to now and its label attached.
    pub fn get_decayed(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<RelationshipView> {
        let _span = relationship_span!("get", user_id, companion_id).entered();
        require_ids(user_id, companion_id)?;
        match self.store.get_by_pair(user_id, companion_id)? {
            Some(state) => Ok(self.scoring.project(state, self.clock.now())),
            None => Err(RapportError::RelationshipNotFound {
                user_id: user_id.to_string(),
                companion_id: companion_id.to_string(),
            }),
        }
    }

    /// Like [`get_decayed`](Self::get_decayed) but `None` for a missing pair.
    pub fn find_decayed(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<Option<RelationshipView>> {
        let _span = relationship_span!("find", user_id, companion_id).entered();
        require_ids(user_id, companion_id)?;
        Ok(self
            .store
            .get_by_pair(user_id, companion_id)?
            .map(|state| self.scoring.project(state, self.clock.now())))
    }

    /// Apply an interaction's deltas to the stored baseline.
    ///
    /// `Ok(None)` when the pair has no relationship; that is not an error.
    /// Returns the new stored (undecayed) state otherwise.
    pub fn apply_event(
        &self,
        user_id: &str,
        companion_id: &str,
        kind: InteractionKind,
    ) -> RapportResult<Option<RelationshipState>> {
        let _span = event_span!(kind, user_id, companion_id).entered();
        require_ids(user_id, companion_id)?;
        let deltas = self.scoring.events().deltas(kind);
        let updated = self.store.apply_delta(
            user_id,
            companion_id,
            deltas.mood,
            deltas.relationship,
            self.clock.now(),
        )?;

        match &updated {
            Some(state) => tracing::debug!(
                mood = state.mood_score.value(),
                relationship = state.relationship_score.value(),
                "event applied"
            ),
            None => tracing::debug!("no relationship for pair; event ignored"),
        }
        Ok(updated)
    }

    /// Every relationship of a user, decayed independently, most recently
    /// updated first.
    pub fn list_all(&self, user_id: &str) -> RapportResult<Vec<RelationshipView>> {
        let _span = relationship_span!("list", user_id).entered();
        require_user(user_id)?;
        let now = self.clock.now();
        Ok(self
            .store
            .get_all_by_user(user_id)?
            .into_iter()
            .map(|state| self.scoring.project(state, now))
            .collect())
    }
}
