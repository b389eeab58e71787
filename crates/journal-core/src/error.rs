//! Error types for a chat exchange.

use thiserror::Error;

/// Errors that can occur while conversing with the completion service.
///
/// None of the variants ever carry the provider credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The request was rejected before any outbound call.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The completion service answered with an application-level error.
    #[error("completion service error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The completion service could not be reached or timed out.
    #[error("completion service unavailable")]
    UpstreamUnavailable,

    /// The completion service answered successfully but the reply was unreadable.
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}
