//! Second Brain journal API server.

use std::sync::Arc;

use api::{AppState, Config, Settings, TokenIssuer};
use database::Database;
use groq_client::GroqClient;
use journal_core::ConversationProxy;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting journal API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Completion service
    let client = GroqClient::new(config.groq.clone())?;
    info!(model = %client.config().model, "Completion service configured");
    let proxy = ConversationProxy::new(Arc::new(client));

    // Build application state
    let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl);
    let state = AppState::new(db, tokens, proxy, Settings::from(&config));

    let app = api::app(state);

    // Start server
    info!(addr = %config.addr, "Journal API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
