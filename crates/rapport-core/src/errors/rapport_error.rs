use super::StorageError;

/// Top-level error for every fallible rapport operation.
///
/// Pure computations (clamp, decay, streaks, milestones) never produce one;
/// only store-facing and input-validating operations do.
#[derive(Debug, thiserror::Error)]
pub enum RapportError {
    #[error("no relationship between user {user_id} and companion {companion_id}")]
    RelationshipNotFound {
        user_id: String,
        companion_id: String,
    },

    #[error("relationship between user {user_id} and companion {companion_id} already exists")]
    AlreadyExists {
        user_id: String,
        companion_id: String,
    },

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("companion not found: {id}")]
    CompanionNotFound { id: String },

    #[error("story not found: {id}")]
    StoryNotFound { id: String },

    #[error("reply generation failed: {reason}")]
    ReplyGenerationFailed { reason: String },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl RapportError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for errors the HTTP layer maps to a 404-class response.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RelationshipNotFound { .. }
                | Self::CompanionNotFound { .. }
                | Self::StoryNotFound { .. }
        )
    }

    /// True for errors caused by the caller rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. } | Self::InvalidInput { .. })
    }
}

pub type RapportResult<T> = Result<T, RapportError>;
