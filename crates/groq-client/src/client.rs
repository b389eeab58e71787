//! GroqClient implementation of the completion service.

use async_trait::async_trait;
use journal_core::{AssistantReply, ChatError, CompletionService, ConversationTurn, ProviderCredential};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api_types::{ApiError, ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::GroqConfig;

/// A completion service backed by an OpenAI-compatible HTTP API.
///
/// One request per call, no retries. Transport failures and timeouts become
/// [`ChatError::UpstreamUnavailable`]; error responses become
/// [`ChatError::Upstream`] with the provider's status and message.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    /// Create a new GroqClient with the given configuration.
    pub fn new(config: GroqConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        info!(
            api_url = %config.api_url,
            model = %config.model,
            timeout_secs = config.timeout.as_secs(),
            "GroqClient initialized"
        );

        Ok(Self { client, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    /// Turn a non-success response into an upstream error.
    async fn upstream_error(
        response: reqwest::Response,
        credential: &ProviderCredential,
    ) -> ChatError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ApiError>(&body) {
            Ok(api_error) => {
                if let ApiErrorBody::Details {
                    error_type: Some(ref kind),
                    ..
                } = api_error.error
                {
                    debug!(status = status.as_u16(), kind = %kind, "Provider error type");
                }
                api_error.error.message().to_string()
            }
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => fallback_message(status),
        };

        ChatError::Upstream {
            status: status.as_u16(),
            message: credential.redact(&message),
        }
    }
}

#[async_trait]
impl CompletionService for GroqClient {
    async fn complete(
        &self,
        transcript: &[ConversationTurn],
        credential: &ProviderCredential,
    ) -> Result<AssistantReply, ChatError> {
        let url = self.config.completions_url();

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: transcript,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(model = %self.config.model, turns = transcript.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(
                    timeout = e.is_timeout(),
                    connect = e.is_connect(),
                    error = %e,
                    "Failed to reach completion service"
                );
                ChatError::UpstreamUnavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = Self::upstream_error(response, credential).await;
            warn!(status = status.as_u16(), "Completion service returned an error");
            return Err(err);
        }

        let payload: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                warn!("Timed out reading completion reply");
                ChatError::UpstreamUnavailable
            } else {
                ChatError::MalformedReply(format!("reply is not JSON: {}", e))
            }
        })?;

        let completion: ChatCompletionResponse = serde_json::from_value(payload.clone())
            .map_err(|e| ChatError::MalformedReply(format!("unexpected reply shape: {}", e)))?;

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| {
                warn!("No content in completion reply");
                ChatError::MalformedReply("reply has no message content".to_string())
            })?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Token usage"
            );
        }

        Ok(AssistantReply {
            content,
            model: completion.model,
            payload,
        })
    }

    fn name(&self) -> &str {
        "Groq"
    }
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|reason| format!("Completion service error: {}", reason))
        .unwrap_or_else(|| "Completion service error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_name() {
        let client = GroqClient::new(GroqConfig::default()).unwrap();
        assert_eq!(client.name(), "Groq");
    }

    #[test]
    fn test_fallback_message_uses_reason() {
        assert_eq!(
            fallback_message(StatusCode::TOO_MANY_REQUESTS),
            "Completion service error: Too Many Requests"
        );
    }
}
