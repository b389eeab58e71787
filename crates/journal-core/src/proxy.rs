//! Conversation proxy: validate, build the transcript, forward, normalize.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::credential::ProviderCredential;
use crate::error::ChatError;
use crate::prompt::{compose_system_prompt, hash_prompt};
use crate::reflection::Reflection;
use crate::service::{AssistantReply, CompletionService};
use crate::transcript::build_transcript;
use crate::turn::ConversationTurn;

/// Everything needed for one chat exchange.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// The new message from the user.
    pub user_message: String,
    /// Key for the completion provider. Never persisted.
    pub provider_credential: ProviderCredential,
    /// Caller-supplied history; used verbatim when non-empty.
    pub prior_turns: Vec<ConversationTurn>,
    pub assistant_name: String,
    pub assistant_tone: String,
    /// Mood the user reports right now, if any.
    pub current_mood: Option<String>,
    /// The owner's recent reflections, most-recent-first.
    pub owner_reflections: Vec<Reflection>,
}

/// Forwards chat exchanges to a [`CompletionService`].
#[derive(Clone)]
pub struct ConversationProxy {
    service: Arc<dyn CompletionService>,
}

impl ConversationProxy {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.service.name()
    }

    /// Run one chat exchange.
    ///
    /// Fails with [`ChatError::InvalidRequest`] before any outbound call when
    /// the message or the credential is blank.
    pub async fn converse(&self, request: ChatRequest) -> Result<AssistantReply, ChatError> {
        let transcript = self.prepare(&request)?;

        let reply = self
            .service
            .complete(&transcript, &request.provider_credential)
            .await;

        match &reply {
            Ok(reply) => debug!(
                provider = self.service.name(),
                reply_chars = reply.content.len(),
                "Completion succeeded"
            ),
            Err(err) => warn!(provider = self.service.name(), error = %err, "Completion failed"),
        }

        reply
    }

    /// Validate the request and build its transcript.
    pub fn prepare(&self, request: &ChatRequest) -> Result<Vec<ConversationTurn>, ChatError> {
        if request.user_message.trim().is_empty() {
            return Err(ChatError::InvalidRequest("message is required".to_string()));
        }
        if request.provider_credential.is_empty() {
            return Err(ChatError::InvalidRequest(
                "provider credential is required".to_string(),
            ));
        }

        let system_prompt = compose_system_prompt(
            &request.assistant_name,
            &request.assistant_tone,
            request.current_mood.as_deref(),
            &request.owner_reflections,
        );

        let transcript = build_transcript(
            request.prior_turns.clone(),
            &system_prompt,
            &request.user_message,
        );

        debug!(
            provider = self.service.name(),
            reflections = request.owner_reflections.len(),
            prior_turns = request.prior_turns.len(),
            transcript_turns = transcript.len(),
            prompt_fingerprint = %hash_prompt(&system_prompt),
            "Prepared chat transcript"
        );

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::reflection::Categories;
    use crate::turn::Role;

    /// Records every transcript it receives and answers with a fixed outcome.
    struct RecordingService {
        calls: Mutex<Vec<Vec<ConversationTurn>>>,
        outcome: Result<AssistantReply, ChatError>,
    }

    impl RecordingService {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                outcome: Ok(AssistantReply::text(text)),
            })
        }

        fn failing(err: ChatError) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                outcome: Err(err),
            })
        }

        fn calls(&self) -> Vec<Vec<ConversationTurn>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionService for RecordingService {
        async fn complete(
            &self,
            transcript: &[ConversationTurn],
            _credential: &ProviderCredential,
        ) -> Result<AssistantReply, ChatError> {
            self.calls.lock().unwrap().push(transcript.to_vec());
            self.outcome.clone()
        }

        fn name(&self) -> &str {
            "Recording"
        }
    }

    fn request(message: &str, credential: &str) -> ChatRequest {
        ChatRequest {
            user_message: message.to_string(),
            provider_credential: ProviderCredential::new(credential),
            prior_turns: Vec::new(),
            assistant_name: "Nova".to_string(),
            assistant_tone: "friendly".to_string(),
            current_mood: Some("Happy".to_string()),
            owner_reflections: vec![Reflection {
                id: "r1".to_string(),
                owner_email: "a@example.com".to_string(),
                content: "Went hiking".to_string(),
                mood: Some("Calm".to_string()),
                categories: Categories::new(),
                created_at: "2026-01-01T00:00:00.000Z".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_fresh_exchange_sends_system_then_user() {
        let service = RecordingService::replying("Sounds lovely");
        let proxy = ConversationProxy::new(service.clone());

        let reply = proxy.converse(request("What did I do?", "key")).await.unwrap();
        assert_eq!(reply.content, "Sounds lovely");

        let calls = service.calls();
        assert_eq!(calls.len(), 1);
        let transcript = &calls[0];
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, Role::System);
        assert!(transcript[0].content.contains("- (Calm) Went hiking"));
        assert_eq!(transcript[1], ConversationTurn::user("What did I do?"));
    }

    #[tokio::test]
    async fn test_prior_system_turn_not_duplicated() {
        let service = RecordingService::replying("ok");
        let proxy = ConversationProxy::new(service.clone());

        let mut req = request("next", "key");
        req.prior_turns = vec![
            ConversationTurn::system("kept"),
            ConversationTurn::user("first"),
            ConversationTurn::assistant("reply"),
            ConversationTurn::user("next"),
        ];
        proxy.converse(req).await.unwrap();

        let transcript = &service.calls()[0];
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0], ConversationTurn::system("kept"));
        assert_eq!(transcript.iter().filter(|t| t.is_system()).count(), 1);
    }

    #[tokio::test]
    async fn test_blank_message_rejected_without_call() {
        let service = RecordingService::replying("unused");
        let proxy = ConversationProxy::new(service.clone());

        let result = proxy.converse(request("  ", "key")).await;
        assert!(matches!(result, Err(ChatError::InvalidRequest(_))));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_credential_rejected_without_call() {
        let service = RecordingService::replying("unused");
        let proxy = ConversationProxy::new(service.clone());

        let result = proxy.converse(request("hello", "")).await;
        assert!(matches!(result, Err(ChatError::InvalidRequest(_))));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_passes_through() {
        let service = RecordingService::failing(ChatError::Upstream {
            status: 429,
            message: "rate limited".to_string(),
        });
        let proxy = ConversationProxy::new(service);

        let err = proxy.converse(request("hello", "key")).await.unwrap_err();
        assert_eq!(
            err,
            ChatError::Upstream {
                status: 429,
                message: "rate limited".to_string()
            }
        );
    }
}
