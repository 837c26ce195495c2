mod conversation;
mod insights;
mod interaction;
mod reaction;
mod relationship;

pub use conversation::{Companion, Memory, Message, MessageRole, ReplyRequest};
pub use insights::{
    CompanionInsights, ConversationStats, InsightStats, Milestone, MoodSnapshot, StreakInfo,
};
pub use interaction::InteractionKind;
pub use reaction::{ReactionKind, ReactionSummary, RecentReaction, Story, StoryReaction};
pub use relationship::{MoodLabel, RelationshipState, RelationshipView};
