//! Banner and health check endpoints.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
}

/// Plain-text banner at the root.
pub async fn banner() -> &'static str {
    "Second Brain API is running!"
}

/// Health check endpoint.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}
