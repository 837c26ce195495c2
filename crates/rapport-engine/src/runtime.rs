//! RapportRuntime: owns the storage engine and every service built on it.

use std::path::Path;
use std::sync::Arc;

use rapport_core::config::RapportConfig;
use rapport_core::errors::{RapportError, RapportResult};
use rapport_core::traits::{IClock, IReplyGenerator};
use rapport_insights::InsightsAggregator;
use rapport_scoring::ScoringEngine;
use rapport_storage::StorageEngine;

use crate::chat::ChatService;
use crate::clock::SystemClock;
use crate::fallback::FallbackReplyGenerator;
use crate::relationship::RelationshipEngine;
use crate::story::StoryService;

/// All services share one `Arc<StorageEngine>` and one clock.
pub struct RapportRuntime {
    pub storage: Arc<StorageEngine>,
    pub relationships: Arc<RelationshipEngine>,
    pub chat: ChatService,
    pub stories: StoryService,
    pub insights: InsightsAggregator,
    pub config: RapportConfig,
}

impl RapportRuntime {
    /// Install tracing, then open with the system clock and the canned reply
    /// generator. `db_path` of `None` opens an in-memory database.
    pub fn open(config: RapportConfig, db_path: Option<&Path>) -> RapportResult<Self> {
        rapport_observability::init_tracing(&config.observability);
        Self::with_parts(
            config,
            db_path,
            Arc::new(SystemClock),
            Arc::new(FallbackReplyGenerator),
        )
    }

    /// Parse a TOML config string, then [`open`](Self::open).
    pub fn from_toml(toml_str: &str, db_path: Option<&Path>) -> RapportResult<Self> {
        let config = RapportConfig::from_toml(toml_str)
            .map_err(|e| RapportError::ConfigError(e.to_string()))?;
        Self::open(config, db_path)
    }

    /// Open with an explicit clock and reply generator.
    pub fn with_parts(
        config: RapportConfig,
        db_path: Option<&Path>,
        clock: Arc<dyn IClock>,
        replies: Arc<dyn IReplyGenerator>,
    ) -> RapportResult<Self> {
        let storage = Arc::new(match db_path {
            Some(path) => StorageEngine::open_with_config(path, &config.storage)?,
            None => StorageEngine::open_in_memory()?,
        });

        let scoring = ScoringEngine::from_config(&config.scoring);
        let classifier = *scoring.classifier();

        let relationships = Arc::new(RelationshipEngine::new(
            storage.clone(),
            scoring,
            clock.clone(),
        ));

        let chat = ChatService::new(
            storage.clone(),
            relationships.clone(),
            replies,
            clock.clone(),
            config.insights.conversation_history,
        );

        let stories = StoryService::new(
            storage.clone(),
            storage.clone(),
            relationships.clone(),
            clock.clone(),
        );

        let insights = InsightsAggregator::new(
            storage.clone(),
            storage.clone(),
            clock,
            classifier,
            config.insights.clone(),
        );

        tracing::info!(
            in_memory = db_path.is_none(),
            version = rapport_core::constants::VERSION,
            "rapport runtime ready"
        );

        Ok(Self {
            storage,
            relationships,
            chat,
            stories,
            insights,
            config,
        })
    }
}
