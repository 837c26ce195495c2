use crate::errors::RapportResult;
use crate::models::{Companion, Memory, Message};

/// Companions, chat messages, and saved memories.
pub trait IConversationStorage: Send + Sync {
    fn create_companion(&self, companion: &Companion) -> RapportResult<()>;
    fn get_companion(&self, id: &str) -> RapportResult<Option<Companion>>;

    fn create_message(&self, message: &Message) -> RapportResult<()>;
    /// The newest `limit` messages of a conversation, newest first.
    fn recent_messages(
        &self,
        user_id: &str,
        companion_id: &str,
        limit: usize,
    ) -> RapportResult<Vec<Message>>;

    fn create_memory(&self, memory: &Memory) -> RapportResult<()>;
}
