//! # rapport-engine
//!
//! The write side of the relationship model and the services that trigger it:
//! chat turns and story reactions move the stored baseline, reads project it
//! through decay. [`RapportRuntime`] wires everything to one storage engine.

pub mod chat;
pub mod clock;
pub mod fallback;
pub mod relationship;
pub mod runtime;
pub mod story;

pub use chat::ChatService;
pub use clock::{ManualClock, SystemClock};
pub use fallback::{fallback_reply, FallbackReplyGenerator, PersonalityKeyword};
pub use relationship::RelationshipEngine;
pub use runtime::RapportRuntime;
pub use story::StoryService;
