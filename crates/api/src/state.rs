//! Application state shared across handlers.

use database::Database;
use journal_core::ConversationProxy;

use crate::auth::TokenIssuer;
use crate::config::Config;

/// Request-independent knobs the handlers read.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Fallback assistant name for chat requests.
    pub assistant_name: String,
    /// Fallback assistant tone for chat requests.
    pub assistant_tone: String,
    /// How many recent reflections ground a chat exchange.
    pub context_reflections: u32,
    /// bcrypt cost for new password hashes.
    pub bcrypt_cost: u32,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            assistant_name: config.assistant_name.clone(),
            assistant_tone: config.assistant_tone.clone(),
            context_reflections: config.context_reflections,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Bearer token issuer and verifier.
    pub tokens: TokenIssuer,
    /// Forwards chat exchanges to the completion service.
    pub proxy: ConversationProxy,
    pub settings: Settings,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, tokens: TokenIssuer, proxy: ConversationProxy, settings: Settings) -> Self {
        Self {
            db,
            tokens,
            proxy,
            settings,
        }
    }
}
