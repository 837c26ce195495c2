//! # rapport-scoring
//!
//! Pure scoring rules: mood classification, read-time mood decay, and the
//! per-event deltas that move the stored baseline. Nothing here touches storage.

pub mod decay;
pub mod engine;
pub mod events;
pub mod mood;

pub use decay::DecayFunction;
pub use engine::ScoringEngine;
pub use events::{EventScorer, ScoreUpdate};
pub use mood::MoodClassifier;
