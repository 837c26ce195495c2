//! SQL for each table family, as free functions over a `Connection`.

pub mod conversation_ops;
pub mod mood_ops;
pub mod relationship_ops;
pub mod story_ops;
