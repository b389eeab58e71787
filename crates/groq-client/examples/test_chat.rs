//! Send one message through GroqClient.
//!
//! Run with: cargo run -p groq-client --example test_chat
//! Or with a custom message: cargo run -p groq-client --example test_chat -- "Your message here"
//!
//! Make sure to set environment variables in .env:
//!   GROQ_API_KEY - provider key, passed per request like the API server does

use groq_client::{CompletionService, ConversationTurn, GroqClient, GroqConfig, ProviderCredential};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Hello! Please respond with a short greeting.".to_string()
    };

    let credential = ProviderCredential::new(env::var("GROQ_API_KEY")?);
    let client = GroqClient::new(GroqConfig::from_env())?;

    println!("API URL: {}", client.config().api_url);
    println!("Model: {}", client.config().model);
    println!();

    let transcript = vec![
        ConversationTurn::system("You are a friendly journaling assistant."),
        ConversationTurn::user(message_text.as_str()),
    ];

    println!("Sending: \"{}\"", message_text);
    println!("Waiting for response...\n");

    let reply = client.complete(&transcript, &credential).await?;

    println!("=== Response ===");
    println!("{}", reply.content);
    println!("================");

    Ok(())
}
