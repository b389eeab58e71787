//! Error types for the REST API.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::{DatabaseError, ValidationError};
use journal_core::ChatError;
use thiserror::Error;

/// Errors returned by API handlers.
///
/// Authentication failures are deliberately coarse on the wire: a missing
/// user and a wrong password both surface as `InvalidCredentials`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// No `Authorization` header.
    #[error("No token provided")]
    MissingToken,

    /// `Authorization` header present but not a bearer token.
    #[error("Malformed token")]
    MalformedToken,

    /// Token signature, shape or expiry rejected. The cause is only logged.
    #[error("Invalid token")]
    InvalidToken(String),

    /// Unknown email or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Record absent, or owned by someone else.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate registration.
    #[error("{0}")]
    Conflict(String),

    /// The completion service reported an error.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The completion service could not be reached.
    #[error("Failed to contact completion service")]
    UpstreamUnavailable,

    /// Persistence failure.
    #[error("Database error: {0}")]
    Storage(DatabaseError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { entity, .. } => {
                ApiError::NotFound(format!("{} not found", entity))
            }
            DatabaseError::AlreadyExists { entity, .. } => {
                ApiError::Conflict(format!("{} already exists", entity))
            }
            other => ApiError::Storage(other),
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::InvalidRequest(msg) => ApiError::Validation(msg),
            ChatError::Upstream { status, message } => ApiError::Upstream { status, message },
            ChatError::UpstreamUnavailable => ApiError::UpstreamUnavailable,
            ChatError::MalformedReply(detail) => {
                tracing::error!(detail = %detail, "Unreadable completion reply");
                ApiError::Upstream {
                    status: StatusCode::BAD_GATEWAY.as_u16(),
                    message: "Completion service returned an unreadable reply".to_string(),
                }
            }
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingToken | ApiError::MalformedToken | ApiError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::InvalidToken(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            ApiError::UpstreamUnavailable | ApiError::Storage(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            ApiError::InvalidToken(cause) => {
                tracing::warn!(cause = %cause, "Rejected bearer token");
                self.to_string()
            }
            ApiError::Storage(err) => {
                tracing::error!("Database error: {}", err);
                "Storage error".to_string()
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            ApiError::Upstream { status, message } => {
                tracing::warn!(status, "Relaying completion service error");
                message.clone()
            }
            _ => self.to_string(),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
