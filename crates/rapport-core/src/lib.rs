//! # rapport-core
//!
//! Foundation crate for the rapport scoring engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod score;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RapportConfig;
pub use errors::{RapportError, RapportResult};
pub use models::{InteractionKind, MoodLabel, ReactionKind, RelationshipState, RelationshipView};
pub use score::Score;
