//! Span definitions per operation: relationship lookups, interaction events,
//! insights, chat turns, and story reactions.

/// Span around a relationship read or create.
#[macro_export]
macro_rules! relationship_span {
    ($op:expr, $user_id:expr) => {
        tracing::info_span!("rapport.relationship", op = %$op, user_id = %$user_id)
    };
    ($op:expr, $user_id:expr, $companion_id:expr) => {
        tracing::info_span!(
            "rapport.relationship",
            op = %$op,
            user_id = %$user_id,
            companion_id = %$companion_id
        )
    };
}

/// Span around applying one interaction event.
#[macro_export]
macro_rules! event_span {
    ($kind:expr, $user_id:expr, $companion_id:expr) => {
        tracing::info_span!(
            "rapport.event",
            kind = %$kind,
            user_id = %$user_id,
            companion_id = %$companion_id
        )
    };
}

/// Span around an insights or reaction-summary computation.
#[macro_export]
macro_rules! insights_span {
    ($op:expr, $user_id:expr, $companion_id:expr) => {
        tracing::info_span!(
            "rapport.insights",
            op = %$op,
            user_id = %$user_id,
            companion_id = %$companion_id
        )
    };
}

/// Span around one chat turn.
#[macro_export]
macro_rules! chat_span {
    ($user_id:expr, $companion_id:expr) => {
        tracing::info_span!("rapport.chat", user_id = %$user_id, companion_id = %$companion_id)
    };
}

/// Span around a story reaction.
#[macro_export]
macro_rules! story_span {
    ($user_id:expr, $story_id:expr) => {
        tracing::info_span!("rapport.story", user_id = %$user_id, story_id = %$story_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RELATIONSHIP: &str = "rapport.relationship";
    pub const EVENT: &str = "rapport.event";
    pub const INSIGHTS: &str = "rapport.insights";
    pub const CHAT: &str = "rapport.chat";
    pub const STORY: &str = "rapport.story";
}
