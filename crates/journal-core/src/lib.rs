//! Core types and conversation flow for the Second Brain journal.
//!
//! This crate holds everything the journaling backend and its clients share:
//!
//! - [`Reflection`] / [`Categories`] - a single journal entry and its tags
//! - [`ConversationTurn`] / [`Role`] - one entry of a chat transcript
//! - [`compose_system_prompt`] - turns recent reflections into an instruction
//! - [`ConversationProxy`] - builds the transcript and forwards it upstream
//! - [`CompletionService`] - the seam to the external completion provider
//! - [`ChatError`] - the normalized failure taxonomy for a chat exchange
//!
//! # Example
//!
//! ```rust
//! use journal_core::{async_trait, AssistantReply, ChatError, CompletionService};
//! use journal_core::{ConversationTurn, ProviderCredential};
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl CompletionService for Canned {
//!     async fn complete(
//!         &self,
//!         _transcript: &[ConversationTurn],
//!         _credential: &ProviderCredential,
//!     ) -> Result<AssistantReply, ChatError> {
//!         Ok(AssistantReply::text("Hello!"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Canned"
//!     }
//! }
//! ```

mod credential;
mod error;
mod grounding;
mod prompt;
mod proxy;
mod reflection;
mod service;
mod transcript;
mod turn;

pub use credential::ProviderCredential;
pub use error::ChatError;
pub use grounding::{is_grounded, GROUNDING_PREFIX_CHARS};
pub use prompt::{compose_system_prompt, hash_prompt};
pub use proxy::{ChatRequest, ConversationProxy};
pub use reflection::{categorize, normalize_categories, Categories, Reflection};
pub use service::{AssistantReply, CompletionService};
pub use transcript::build_transcript;
pub use turn::{ConversationTurn, Role};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
