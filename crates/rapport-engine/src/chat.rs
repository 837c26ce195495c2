//! ChatService: one user message in, one companion reply out.

use std::sync::Arc;

use rapport_core::constants::MAX_CONTENT_CHARS;
use rapport_core::errors::{RapportError, RapportResult};
use rapport_core::models::{
    InteractionKind, Memory, Message, MessageRole, MoodLabel, ReplyRequest,
};
use rapport_core::traits::{IClock, IConversationStorage, IReplyGenerator};
use rapport_observability::chat_span;

use crate::fallback::fallback_reply;
use crate::relationship::RelationshipEngine;

pub struct ChatService {
    conversations: Arc<dyn IConversationStorage>,
    relationships: Arc<RelationshipEngine>,
    replies: Arc<dyn IReplyGenerator>,
    clock: Arc<dyn IClock>,
    history_limit: usize,
}

fn validate_content(content: &str) -> RapportResult<()> {
    if content.trim().is_empty() {
        return Err(RapportError::invalid("message content is required"));
    }
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(RapportError::invalid(format!(
            "content exceeds {MAX_CONTENT_CHARS} characters"
        )));
    }
    Ok(())
}

impl ChatService {
    pub fn new(
        conversations: Arc<dyn IConversationStorage>,
        relationships: Arc<RelationshipEngine>,
        replies: Arc<dyn IReplyGenerator>,
        clock: Arc<dyn IClock>,
        history_limit: usize,
    ) -> Self {
        Self {
            conversations,
            relationships,
            replies,
            clock,
            history_limit,
        }
    }

    /// Store the user's message, produce and store the companion's reply, then
    /// credit the chat turn to the relationship.
    ///
    /// Reply generation failures fall back to the canned table. The
    /// relationship update is best-effort and never fails the send.
    pub fn send_message(
        &self,
        user_id: &str,
        companion_id: &str,
        content: &str,
    ) -> RapportResult<(Message, Message)> {
        let _span = chat_span!(user_id, companion_id).entered();
        validate_content(content)?;

        let user_msg = Message::new(
            user_id,
            companion_id,
            content,
            MessageRole::User,
            self.clock.now(),
        );
        self.conversations.create_message(&user_msg)?;

        let companion = self
            .conversations
            .get_companion(companion_id)?
            .ok_or_else(|| RapportError::CompanionNotFound {
                id: companion_id.to_string(),
            })?;

        let view = match self.relationships.find_decayed(user_id, companion_id) {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!(error = %e, "relationship unavailable; replying as neutral");
                None
            }
        };
        let mood_label = view.as_ref().map_or(MoodLabel::Neutral, |v| v.mood_label);

        let mut history = match self
            .conversations
            .recent_messages(user_id, companion_id, self.history_limit)
        {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(error = %e, "conversation history unavailable");
                Vec::new()
            }
        };
        history.reverse();

        let request = ReplyRequest {
            companion: &companion,
            mood_label,
            relationship_score: view.as_ref().map(|v| v.state.relationship_score.value()),
            history: &history,
        };
        let reply = match self.replies.generate_reply(&request) {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => {
                tracing::warn!("reply generator returned an empty reply; using fallback");
                fallback_reply(mood_label, &companion.personality).to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, "reply generation failed; using fallback");
                fallback_reply(mood_label, &companion.personality).to_string()
            }
        };

        let companion_msg = Message::new(
            user_id,
            companion_id,
            reply,
            MessageRole::Companion,
            self.clock.now(),
        );
        self.conversations.create_message(&companion_msg)?;

        if let Err(e) = self
            .relationships
            .apply_event(user_id, companion_id, InteractionKind::ChatTurn)
        {
            tracing::warn!(error = %e, "relationship update after chat turn failed");
        }

        Ok((user_msg, companion_msg))
    }

    /// Save a memory for the pair, optionally pointing at one of its messages.
    pub fn save_memory(
        &self,
        user_id: &str,
        companion_id: &str,
        content: &str,
        message_id: Option<&str>,
        tag: Option<&str>,
    ) -> RapportResult<Memory> {
        validate_content(content)?;

        let memory = Memory {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            companion_id: companion_id.to_string(),
            message_id: message_id.map(str::to_string),
            content: content.to_string(),
            tag: tag.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string),
            pinned: false,
            created_at: self.clock.now(),
        };
        self.conversations.create_memory(&memory)?;
        tracing::debug!(memory_id = %memory.id, "memory saved");
        Ok(memory)
    }
}
