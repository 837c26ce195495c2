use chrono::{DateTime, Utc};

use crate::errors::RapportResult;
use crate::models::RelationshipState;

/// Persistence of relationship states, keyed by (user, companion).
pub trait IRelationshipStorage: Send + Sync {
    /// Insert a new state. Fails with `AlreadyExists` if the pair has one.
    fn create(&self, state: &RelationshipState) -> RapportResult<()>;

    /// The stored (undecayed) state for a pair.
    fn get_by_pair(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<Option<RelationshipState>>;

    /// All states of a user, most recently updated first.
    fn get_all_by_user(&self, user_id: &str) -> RapportResult<Vec<RelationshipState>>;

    /// Full overwrite of scores and timestamps, keyed by `state.id`.
    fn update(&self, state: &RelationshipState) -> RapportResult<()>;

    /// Add deltas to the stored scores and clamp to [0, 100] in one atomic
    /// step, moving both timestamps to `now`. Returns `None` when the pair
    /// has no state.
    fn apply_delta(
        &self,
        user_id: &str,
        companion_id: &str,
        mood_delta: f64,
        relationship_delta: f64,
        now: DateTime<Utc>,
    ) -> RapportResult<Option<RelationshipState>>;
}
