//! The completion service seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::credential::ProviderCredential;
use crate::error::ChatError;
use crate::turn::ConversationTurn;

/// A decoded reply from the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    /// The assistant's text.
    pub content: String,
    /// Model that produced the reply, when reported.
    pub model: Option<String>,
    /// The provider's reply body, relayed verbatim to HTTP callers.
    pub payload: Value,
}

impl AssistantReply {
    /// A reply with no provider payload beyond the text itself.
    pub fn text(content: impl Into<String>) -> Self {
        let content = content.into();
        let payload = serde_json::json!({
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        });
        Self {
            content,
            model: None,
            payload,
        }
    }
}

/// An external text-completion provider.
///
/// Implementations perform exactly one round trip per call with no retries,
/// and must keep the credential out of logs and out of returned errors.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send a transcript and return the assistant's reply.
    async fn complete(
        &self,
        transcript: &[ConversationTurn],
        credential: &ProviderCredential,
    ) -> Result<AssistantReply, ChatError>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}
