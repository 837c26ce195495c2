use crate::errors::RapportResult;
use crate::models::ReplyRequest;

/// External text generation producing a companion's reply.
///
/// Treated as opaque: any error makes the caller fall back to a static reply.
pub trait IReplyGenerator: Send + Sync {
    fn generate_reply(&self, request: &ReplyRequest<'_>) -> RapportResult<String>;
}
