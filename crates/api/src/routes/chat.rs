//! Chat route: ground the exchange in the caller's reflections and forward it.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use database::reflection;
use journal_core::{ChatRequest, ConversationTurn, ProviderCredential};
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::AuthUser;
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Chat body as sent by the client.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBody {
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "groqApiKey")]
    pub provider_credential: ProviderCredential,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
    #[serde(default)]
    pub assistant_name: Option<String>,
    #[serde(default)]
    pub assistant_tone: Option<String>,
    #[serde(default)]
    pub current_mood: Option<String>,
    /// Accepted but never used; the server composes the system prompt.
    #[serde(default)]
    pub system_prompt: Option<serde_json::Value>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Forward one chat exchange and return the upstream payload verbatim.
pub async fn chat(
    State(state): State<AppState>,
    user: AuthUser,
    body: std::result::Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>> {
    let Json(body) = body?;

    if body.system_prompt.is_some() {
        warn!(owner = %user.email, "Ignoring client-supplied systemPrompt");
    }

    // Reject before touching storage.
    if body.message.trim().is_empty() {
        return Err(ApiError::Validation("message is required".to_string()));
    }
    if body.provider_credential.is_empty() {
        return Err(ApiError::Validation(
            "provider credential is required".to_string(),
        ));
    }

    let owner_reflections = reflection::recent_reflections(
        state.db.pool(),
        &user.email,
        i64::from(state.settings.context_reflections),
    )
    .await?;

    let request = ChatRequest {
        user_message: body.message,
        provider_credential: body.provider_credential,
        prior_turns: body.history,
        assistant_name: non_blank(body.assistant_name)
            .unwrap_or_else(|| state.settings.assistant_name.clone()),
        assistant_tone: non_blank(body.assistant_tone)
            .unwrap_or_else(|| state.settings.assistant_tone.clone()),
        current_mood: non_blank(body.current_mood),
        owner_reflections,
    };

    let reply = state.proxy.converse(request).await?;

    info!(
        owner = %user.email,
        provider = state.proxy.provider_name(),
        model = reply.model.as_deref().unwrap_or("unknown"),
        "Chat exchange completed"
    );

    Ok(Json(reply.payload))
}
