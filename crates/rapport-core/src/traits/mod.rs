mod clock;
mod conversation_storage;
mod insights_storage;
mod relationship_storage;
mod reply_generator;
mod story_storage;

pub use clock::IClock;
pub use conversation_storage::IConversationStorage;
pub use insights_storage::IInsightsStorage;
pub use relationship_storage::IRelationshipStorage;
pub use reply_generator::IReplyGenerator;
pub use story_storage::IStoryStorage;
