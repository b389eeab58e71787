//! Reflection ledger routes. Every handler is scoped to the token's owner.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use database::{reflection, validation, Categories, Reflection};
use journal_core::{categorize, normalize_categories};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateReflectionRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
    /// Derived from the content when absent.
    #[serde(default)]
    pub categories: Option<Categories>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// List the caller's reflections, most recent first.
pub async fn list(State(state): State<AppState>, user: AuthUser) -> Result<Json<Vec<Reflection>>> {
    let reflections = reflection::list_reflections(state.db.pool(), &user.email).await?;
    Ok(Json(reflections))
}

/// Record a new reflection.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    body: std::result::Result<Json<CreateReflectionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Reflection>)> {
    let Json(req) = body?;

    // Stored verbatim; whitespace only matters for the blank check.
    let content = req.content.as_str();
    let mood = req
        .mood
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());
    validation::validate_reflection(content, mood)?;

    let categories = normalize_categories(req.categories.unwrap_or_else(|| categorize(content)));

    let created =
        reflection::create_reflection(state.db.pool(), &user.email, content, mood, &categories)
            .await?;

    info!(
        id = %created.id,
        owner = %user.email,
        categories = created.categories.len(),
        "Reflection created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete one of the caller's reflections.
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    reflection::delete_reflection(state.db.pool(), &user.email, &id).await?;
    info!(id = %id, owner = %user.email, "Reflection deleted");
    Ok(Json(DeleteResponse { success: true }))
}
