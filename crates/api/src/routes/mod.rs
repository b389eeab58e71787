//! Route handlers for the journal API.

pub mod auth;
pub mod chat;
pub mod health;
pub mod reflections;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes, served both at the root and under `/api`.
pub fn router() -> Router<AppState> {
    let routes = Router::new()
        // Auth gate
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        // Reflection ledger
        .route(
            "/reflections",
            get(reflections::list).post(reflections::create),
        )
        .route("/reflections/:id", delete(reflections::remove))
        // Conversation proxy
        .route("/chat", post(chat::chat));

    Router::new()
        .route("/", get(health::banner))
        .route("/health", get(health::health))
        .merge(routes.clone())
        .nest("/api", routes)
}
