//! Client error types.

use thiserror::Error;

/// Errors returned by [`ReflectClient`](crate::ReflectClient) and
/// [`ChatPanel`](crate::ChatPanel).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure talking to the API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A chat send is already outstanding on this panel.
    #[error("A chat message is already being sent")]
    Busy,

    /// Local input rejected before any request was made.
    #[error("{0}")]
    InvalidInput(String),
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
