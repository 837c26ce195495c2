//! Shared fixtures: a runtime on an in-memory store with a manual clock.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use rapport_core::config::RapportConfig;
use rapport_core::errors::{RapportError, RapportResult};
use rapport_core::errors::StorageError;
use rapport_core::models::{Companion, MoodLabel, RelationshipState, ReplyRequest, Story};
use rapport_core::traits::{IRelationshipStorage, IReplyGenerator, IStoryStorage};
use rapport_engine::{
    ChatService, FallbackReplyGenerator, ManualClock, RapportRuntime, RelationshipEngine,
    StoryService,
};
use rapport_scoring::ScoringEngine;
use rapport_storage::StorageEngine;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 9, 0, 0).unwrap()
}

pub struct Harness {
    pub runtime: RapportRuntime,
    pub clock: Arc<ManualClock>,
}

pub fn harness() -> Harness {
    harness_with(Arc::new(FallbackReplyGenerator))
}

pub fn harness_with(replies: Arc<dyn IReplyGenerator>) -> Harness {
    let clock = Arc::new(ManualClock::new(t0()));
    let runtime =
        RapportRuntime::with_parts(RapportConfig::default(), None, clock.clone(), replies).unwrap();
    runtime
        .storage
        .register_companion(&Companion {
            id: "c1".into(),
            name: "Nova".into(),
            description: "Night-sky enthusiast".into(),
            avatar_url: "https://cdn.example/nova.png".into(),
            personality: "Witty and a little sarcastic".into(),
            created_at: t0() - Duration::days(30),
        })
        .unwrap();
    runtime
        .storage
        .create_story(&Story {
            id: "s1".into(),
            companion_id: "c1".into(),
            created_at: t0(),
            expires_at: t0() + Duration::hours(24),
        })
        .unwrap();
    Harness { runtime, clock }
}

/// Always fails, forcing the canned reply.
pub struct FailingGenerator;

impl IReplyGenerator for FailingGenerator {
    fn generate_reply(&self, _request: &ReplyRequest<'_>) -> RapportResult<String> {
        Err(RapportError::ReplyGenerationFailed {
            reason: "upstream timeout".into(),
        })
    }
}

/// What the generator was asked, captured per call.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub mood_label: MoodLabel,
    pub relationship_score: Option<f64>,
    pub history: Vec<String>,
}

/// Echoes the last message and records every request.
#[derive(Default)]
pub struct RecordingGenerator {
    pub seen: Mutex<Vec<SeenRequest>>,
}

impl IReplyGenerator for RecordingGenerator {
    fn generate_reply(&self, request: &ReplyRequest<'_>) -> RapportResult<String> {
        self.seen.lock().unwrap().push(SeenRequest {
            mood_label: request.mood_label,
            relationship_score: request.relationship_score,
            history: request.history.iter().map(|m| m.content.clone()).collect(),
        });
        let last = request.history.last().map(|m| m.content.as_str()).unwrap_or("");
        Ok(format!("echo: {last}"))
    }
}

/// Delegates to the real store but fails every `apply_delta`.
pub struct WriteFailingRelationships {
    pub inner: Arc<StorageEngine>,
}

impl IRelationshipStorage for WriteFailingRelationships {
    fn create(&self, state: &RelationshipState) -> RapportResult<()> {
        self.inner.create(state)
    }

    fn get_by_pair(
        &self,
        user_id: &str,
        companion_id: &str,
    ) -> RapportResult<Option<RelationshipState>> {
        self.inner.get_by_pair(user_id, companion_id)
    }

    fn get_all_by_user(&self, user_id: &str) -> RapportResult<Vec<RelationshipState>> {
        self.inner.get_all_by_user(user_id)
    }

    fn update(&self, state: &RelationshipState) -> RapportResult<()> {
        self.inner.update(state)
    }

    fn apply_delta(
        &self,
        _user_id: &str,
        _companion_id: &str,
        _mood_delta: f64,
        _relationship_delta: f64,
        _now: DateTime<Utc>,
    ) -> RapportResult<Option<RelationshipState>> {
        Err(StorageError::SqliteError {
            message: "database is locked".into(),
        }
        .into())
    }
}

/// Chat and story services whose relationship writes always fail, over the
/// harness store.
pub struct FailingWrites {
    pub relationships: Arc<RelationshipEngine>,
    pub chat: ChatService,
    pub stories: StoryService,
}

pub fn failing_writes(h: &Harness) -> FailingWrites {
    let storage = h.runtime.storage.clone();
    let relationships = Arc::new(RelationshipEngine::new(
        Arc::new(WriteFailingRelationships {
            inner: storage.clone(),
        }),
        ScoringEngine::from_config(&h.runtime.config.scoring),
        h.clock.clone(),
    ));
    let chat = ChatService::new(
        storage.clone(),
        relationships.clone(),
        Arc::new(FallbackReplyGenerator),
        h.clock.clone(),
        h.runtime.config.insights.conversation_history,
    );
    let stories = StoryService::new(
        storage.clone(),
        storage,
        relationships.clone(),
        h.clock.clone(),
    );
    FailingWrites {
        relationships,
        chat,
        stories,
    }
}
