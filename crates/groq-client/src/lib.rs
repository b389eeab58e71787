//! OpenAI-compatible chat completion client.
//!
//! This crate provides the [`CompletionService`] used by the journal's
//! conversation proxy. It talks to Groq's OpenAI-compatible endpoint by
//! default, but any service speaking the `/v1/chat/completions` protocol
//! works by pointing `GROQ_API_URL` at it.
//!
//! The API key is not part of the configuration: every call authenticates
//! with the credential supplied by the end user for that request.
//!
//! # Usage
//!
//! ```rust,no_run
//! use groq_client::{GroqClient, GroqConfig};
//! use journal_core::{CompletionService, ConversationTurn, ProviderCredential};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GroqClient::new(GroqConfig::from_env())?;
//!     let transcript = vec![
//!         ConversationTurn::system("You are a helpful assistant."),
//!         ConversationTurn::user("Hello!"),
//!     ];
//!     let reply = client
//!         .complete(&transcript, &ProviderCredential::new("gsk_..."))
//!         .await?;
//!     println!("{}", reply.content);
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;

pub use client::GroqClient;
pub use config::{GroqConfig, GroqConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL};

// Re-export journal-core types for convenience
pub use journal_core::{
    AssistantReply, ChatError, CompletionService, ConversationTurn, ProviderCredential, Role,
};
