//! Chat completions request and response types.

use journal_core::ConversationTurn;
use serde::{Deserialize, Serialize};

/// Chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Model to use
    pub model: &'a str,
    /// Messages in the conversation
    pub messages: &'a [ConversationTurn],
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Chat completion response body. Only the fields we read are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Model used
    #[serde(default)]
    pub model: Option<String>,
    /// Response choices
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// A response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The message
    pub message: ResponseMessage,
}

/// Response message.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Content (may be null)
    pub content: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// Completion tokens
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error details, either an object or a bare string
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    Details {
        message: String,
        #[serde(rename = "type", default)]
        error_type: Option<String>,
    },
    Message(String),
}

impl ApiErrorBody {
    pub fn message(&self) -> &str {
        match self {
            ApiErrorBody::Details { message, .. } => message,
            ApiErrorBody::Message(message) => message,
        }
    }
}
