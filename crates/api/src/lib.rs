//! REST API for the Second Brain journal.
//!
//! Serves the auth gate, the reflection ledger and the chat proxy over
//! axum. The binary in `main.rs` wires real collaborators; tests build the
//! same router around an in-memory database and a fake completion service.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use auth::{AuthUser, Claims, TokenIssuer};
pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use state::{AppState, Settings};

/// Build the application router with state and middleware applied.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
