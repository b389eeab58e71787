//! Client side of the Second Brain journal.
//!
//! [`ReflectClient`] wraps the REST API with typed calls. Every protected
//! call takes an explicit [`Session`]; there is no ambient token. A
//! [`ChatPanel`] keeps one conversation's transcript and refuses overlapping
//! sends.
//!
//! ```no_run
//! use reflect_client::{NewReflection, ReflectClient};
//!
//! # async fn example() -> reflect_client::Result<()> {
//! let client = ReflectClient::new("http://127.0.0.1:3000")?;
//! let session = client.login("ada@example.com", "correct horse").await?;
//! client
//!     .create_reflection(&session, &NewReflection::new("Went for a run").with_mood("Happy"))
//!     .await?;
//! for reflection in client.list_reflections(&session).await? {
//!     println!("{}", reflection.content);
//! }
//! # Ok(())
//! # }
//! ```

mod chat_panel;
mod client;
mod error;
mod session;

pub use chat_panel::{ChatPanel, PanelReply};
pub use client::{ChatOptions, ChatReply, NewReflection, ReflectClient, DEFAULT_API_URL};
pub use error::{ClientError, Result};
pub use session::{Session, UserInfo};

pub use journal_core::{ProviderCredential, Reflection};
