//! StorageEngine: owns the ConnectionPool, runs migrations on open, and
//! implements every storage trait of `rapport-core`.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

use rapport_core::config::StorageConfig;
use rapport_core::errors::RapportResult;
use rapport_core::models::{
    Companion, ConversationStats, Memory, Message, ReactionKind, RecentReaction,
    RelationshipState, Story, StoryReaction,
};
use rapport_core::traits::{
    IConversationStorage, IInsightsStorage, IRelationshipStorage, IStoryStorage,
};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{conversation_ops, mood_ops, relationship_ops, story_ops};

/// The main storage engine.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a file-backed engine with default pool settings.
    pub fn open(path: &Path) -> RapportResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed engine. `config.db_path` is ignored in favor of `path`.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> RapportResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self { pool };
        engine.initialize()?;
        tracing::debug!(
            path = %path.display(),
            readers = engine.pool.readers.as_ref().map_or(0, |r| r.size()),
            "storage opened"
        );
        Ok(engine)
    }

    /// Open an in-memory engine (for testing).
    pub fn open_in_memory() -> RapportResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> RapportResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Seed a companion. Companions are otherwise managed outside this engine.
    pub fn register_companion(&self, companion: &Companion) -> RapportResult<()> {
        self.create_companion(companion)
    }

    fn with_reader<F, T>(&self, f: F) -> RapportResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> RapportResult<T>,
    {
        self.pool.with_reader(f)
    }
}

impl IRelationshipStorage for StorageEngine {
    fn create(&self, state: &RelationshipState) -> RapportResult<()> {
        self.pool
            .writer
            .with_conn(|conn| relationship_ops::insert_state(conn, state))
    }

    fn get_by_pair(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<Option<RelationshipState>> {
        self.with_reader(|conn| relationship_ops::get_state(conn, user_id, companion_id))
    }

    fn get_all_by_user(&self, user_id: &str) -> RapportResult<Vec<RelationshipState>> {
        self.with_reader(|conn| relationship_ops::list_states(conn, user_id))
    }

    fn update(&self, state: &RelationshipState) -> RapportResult<()> {
        self.pool
            .writer
            .with_conn(|conn| relationship_ops::update_state(conn, state))
    }

    fn apply_delta(
        &self,
        user_id: &str,
        companion_id: &str,
        mood_delta: f64,
        relationship_delta: f64,
        now: DateTime<Utc>,
    ) -> RapportResult<Option<RelationshipState>> {
        self.pool.writer.with_conn(|conn| {
            relationship_ops::apply_delta(
                conn,
                user_id,
                companion_id,
                mood_delta,
                relationship_delta,
                now,
            )
        })
    }
}

impl IInsightsStorage for StorageEngine {
    fn upsert_mood_snapshot(
        &self,
        user_id: &str,
        companion_id: &str,
        mood_score: f64,
        date: NaiveDate,
    ) -> RapportResult<()> {
        self.pool.writer.with_conn(|conn| {
            mood_ops::upsert_snapshot(conn, user_id, companion_id, mood_score, date)
        })
    }

    fn get_mood_history(
        &self,
        user_id: &str,
        companion_id: &str,
        window_days: u32,
        today: NaiveDate,
    ) -> RapportResult<Vec<(NaiveDate, f64)>> {
        self.with_reader(|conn| {
            mood_ops::get_history(conn, user_id, companion_id, window_days, today)
        })
    }

    fn get_distinct_interaction_dates(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<Vec<NaiveDate>> {
        self.with_reader(|conn| {
            conversation_ops::distinct_user_message_dates(conn, user_id, companion_id)
        })
    }

    fn get_stats(&self, user_id: &str, companion_id: &str) -> RapportResult<ConversationStats> {
        self.with_reader(|conn| conversation_ops::conversation_stats(conn, user_id, companion_id))
    }

    fn get_reaction_counts(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<Vec<(ReactionKind, u64)>> {
        self.with_reader(|conn| story_ops::reaction_counts(conn, user_id, companion_id))
    }

    fn get_recent_reactions(
        &self,
        user_id: &str,
        companion_id: &str,
        limit: usize,
    ) -> RapportResult<Vec<RecentReaction>> {
        self.with_reader(|conn| story_ops::recent_reactions(conn, user_id, companion_id, limit))
    }
}

impl IConversationStorage for StorageEngine {
    fn create_companion(&self, companion: &Companion) -> RapportResult<()> {
        self.pool
            .writer
            .with_conn(|conn| conversation_ops::insert_companion(conn, companion))
    }

    fn get_companion(&self, id: &str) -> RapportResult<Option<Companion>> {
        self.with_reader(|conn| conversation_ops::get_companion(conn, id))
    }

    fn create_message(&self, message: &Message) -> RapportResult<()> {
        self.pool
            .writer
            .with_conn(|conn| conversation_ops::insert_message(conn, message))
    }

    fn recent_messages(
        &self,
        user_id: &str,
        companion_id: &str,
        limit: usize,
    ) -> RapportResult<Vec<Message>> {
        self.with_reader(|conn| {
            conversation_ops::recent_messages(conn, user_id, companion_id, limit)
        })
    }

    fn create_memory(&self, memory: &Memory) -> RapportResult<()> {
        self.pool
            .writer
            .with_conn(|conn| conversation_ops::insert_memory(conn, memory))
    }
}

impl IStoryStorage for StorageEngine {
    fn create_story(&self, story: &Story) -> RapportResult<()> {
        self.pool
            .writer
            .with_conn(|conn| story_ops::insert_story(conn, story))
    }

    fn get_story(&self, id: &str) -> RapportResult<Option<Story>> {
        self.with_reader(|conn| story_ops::get_story(conn, id))
    }

    fn create_reaction(&self, reaction: &StoryReaction) -> RapportResult<()> {
        self.pool
            .writer
            .with_conn(|conn| story_ops::insert_reaction(conn, reaction))
    }
}
