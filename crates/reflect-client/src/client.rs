//! HTTP client for the journal API.

use std::time::Duration;

use journal_core::{Categories, ConversationTurn, ProviderCredential, Reflection};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::session::Session;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// A reflection to record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewReflection {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Left to the server to derive when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Categories>,
}

impl NewReflection {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }
}

/// Options for one chat call.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// Prior turns, ending with the new user message. Empty for a fresh chat.
    pub history: Vec<ConversationTurn>,
    pub assistant_name: Option<String>,
    pub assistant_tone: Option<String>,
    pub current_mood: Option<String>,
}

/// The assistant's answer plus the raw upstream payload.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub content: String,
    pub payload: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatBody<'a> {
    message: &'a str,
    provider_credential: &'a str,
    #[serde(skip_serializing_if = "no_turns")]
    history: &'a [ConversationTurn],
    #[serde(skip_serializing_if = "Option::is_none")]
    assistant_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assistant_tone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_mood: Option<&'a str>,
}

fn no_turns(turns: &&[ConversationTurn]) -> bool {
    turns.is_empty()
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client for the journal REST API.
#[derive(Debug, Clone)]
pub struct ReflectClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReflectClient {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:3000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of one reflection, with the id percent-encoded as a single segment.
    fn reflection_url(&self, id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.url("/reflections"))
            .map_err(|e| ClientError::InvalidInput(format!("invalid API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidInput("API URL cannot take a path".to_string()))?
            .push(id);
        Ok(url)
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        self.send(self.http.post(self.url("/signup")).json(&body)).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.send(self.http.post(self.url("/login")).json(&body)).await
    }

    /// The session owner's reflections, most recent first.
    pub async fn list_reflections(&self, session: &Session) -> Result<Vec<Reflection>> {
        let request = self
            .http
            .get(self.url("/reflections"))
            .bearer_auth(session.token());
        self.send(request).await
    }

    pub async fn create_reflection(
        &self,
        session: &Session,
        reflection: &NewReflection,
    ) -> Result<Reflection> {
        if reflection.content.trim().is_empty() {
            return Err(ClientError::InvalidInput(
                "reflection content is required".to_string(),
            ));
        }
        let request = self
            .http
            .post(self.url("/reflections"))
            .bearer_auth(session.token())
            .json(reflection);
        self.send(request).await
    }

    pub async fn delete_reflection(&self, session: &Session, id: &str) -> Result<()> {
        let request = self
            .http
            .delete(self.reflection_url(id)?)
            .bearer_auth(session.token());
        let _: Value = self.send(request).await?;
        Ok(())
    }

    /// Send one chat message. The credential is forwarded, never stored.
    pub async fn chat(
        &self,
        session: &Session,
        credential: &ProviderCredential,
        message: &str,
        options: &ChatOptions,
    ) -> Result<ChatReply> {
        let body = ChatBody {
            message,
            provider_credential: credential.expose(),
            history: &options.history,
            assistant_name: options.assistant_name.as_deref(),
            assistant_tone: options.assistant_tone.as_deref(),
            current_mood: options.current_mood.as_deref(),
        };
        let request = self
            .http
            .post(self.url("/chat"))
            .bearer_auth(session.token())
            .json(&body);

        let payload: Value = self.send(request).await?;
        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        Ok(ChatReply { content, payload })
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }
}

/// Turn an error status into [`ClientError::Api`] with the server's message.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                text.trim().to_string()
            }
        });

    debug!(status = status.as_u16(), message = %message, "API request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
