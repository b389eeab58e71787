//! One running conversation with the assistant.

use journal_core::{is_grounded, ConversationTurn, ProviderCredential, Reflection};
use tokio::sync::Mutex;
use tracing::debug;

use crate::client::{ChatOptions, ReflectClient};
use crate::error::{ClientError, Result};
use crate::session::Session;

/// An assistant reply with the advisory grounding hint.
#[derive(Debug, Clone)]
pub struct PanelReply {
    pub content: String,
    /// Whether the reply quotes the start of any of the user's reflections.
    /// Only a hint; the reply is shown either way.
    pub grounded: bool,
}

/// Holds the transcript of one conversation and serializes sends.
///
/// A second [`send`](ChatPanel::send) while one is outstanding fails with
/// [`ClientError::Busy`] instead of queueing, so turns never interleave.
#[derive(Debug, Default)]
pub struct ChatPanel {
    transcript: Mutex<Vec<ConversationTurn>>,
    options: ChatOptions,
}

impl ChatPanel {
    pub fn new(options: ChatOptions) -> Self {
        Self {
            transcript: Mutex::new(Vec::new()),
            options: ChatOptions {
                history: Vec::new(),
                ..options
            },
        }
    }

    /// Completed user and assistant turns so far, in order.
    pub async fn transcript(&self) -> Vec<ConversationTurn> {
        self.transcript.lock().await.clone()
    }

    /// Send `message` and append both turns on success.
    ///
    /// `reflections` are the user's own entries, used only for the grounding
    /// hint. A failed send leaves the transcript untouched.
    pub async fn send(
        &self,
        client: &ReflectClient,
        session: &Session,
        credential: &ProviderCredential,
        message: &str,
        reflections: &[Reflection],
    ) -> Result<PanelReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ClientError::InvalidInput("message is required".to_string()));
        }

        let mut transcript = self.transcript.try_lock().map_err(|_| ClientError::Busy)?;

        let user_turn = ConversationTurn::user(message);
        let history = if transcript.is_empty() {
            Vec::new()
        } else {
            let mut history = transcript.clone();
            history.push(user_turn.clone());
            history
        };
        let options = ChatOptions {
            history,
            ..self.options.clone()
        };

        let reply = client.chat(session, credential, message, &options).await?;
        let grounded = is_grounded(&reply.content, reflections);
        debug!(grounded, turns = transcript.len() + 2, "Chat reply received");

        transcript.push(user_turn);
        transcript.push(ConversationTurn::assistant(reply.content.clone()));

        Ok(PanelReply {
            content: reply.content,
            grounded,
        })
    }

    /// Forget the conversation.
    pub async fn clear(&self) {
        self.transcript.lock().await.clear();
    }
}
