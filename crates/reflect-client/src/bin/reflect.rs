//! Command-line front end for the journal API.

use clap::{Parser, Subcommand};
use reflect_client::{
    ChatOptions, ChatPanel, NewReflection, ProviderCredential, ReflectClient, Reflection, Session,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Parser)]
#[command(name = "reflect")]
#[command(about = "Second Brain journal from the command line")]
struct Cli {
    /// API base URL
    #[arg(long, env = "REFLECT_API_URL", default_value = reflect_client::DEFAULT_API_URL)]
    api_url: String,

    /// Bearer token from `reflect login` or `reflect signup`
    #[arg(long, env = "REFLECT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an account and print its token
    Signup {
        name: String,
        email: String,
        password: String,
    },
    /// Log in and print a token
    Login { email: String, password: String },
    /// List your reflections, most recent first
    List,
    /// Record a reflection
    Add {
        content: String,
        /// Mood label, e.g. "Happy"
        #[arg(long)]
        mood: Option<String>,
    },
    /// Delete a reflection by id
    Delete { id: String },
    /// Ask the assistant about your reflections
    Chat {
        /// Message to send (omit with --interactive)
        message: Option<String>,

        /// Read messages line by line until EOF
        #[arg(long)]
        interactive: bool,

        /// Provider API key, forwarded per request
        #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
        api_key: String,

        #[arg(long)]
        assistant_name: Option<String>,

        #[arg(long)]
        assistant_tone: Option<String>,

        /// How you feel right now
        #[arg(long)]
        mood: Option<String>,
    },
}

fn session(token: Option<String>) -> Result<Session, Box<dyn std::error::Error>> {
    token
        .filter(|t| !t.trim().is_empty())
        .map(Session::from_token)
        .ok_or_else(|| "Missing token (--token or REFLECT_TOKEN); run `reflect login` first".into())
}

fn print_reflection(reflection: &Reflection) {
    let mood = reflection.mood.as_deref().unwrap_or("No mood");
    println!("{}  {}  ({})", reflection.id, reflection.created_at, mood);
    println!("    {}", reflection.content);
    for (category, tags) in &reflection.categories {
        println!("    {}: {}", category, tags.join(", "));
    }
}

fn print_reply(content: &str, grounded: bool) {
    println!("{}", content);
    if !grounded {
        println!("(note: this answer may not be grounded in your reflections)");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ReflectClient::new(cli.api_url.as_str())?;

    match cli.command {
        Command::Signup {
            name,
            email,
            password,
        } => {
            let session = client.signup(&name, &email, &password).await?;
            println!("{}", session.token());
        }
        Command::Login { email, password } => {
            let session = client.login(&email, &password).await?;
            println!("{}", session.token());
        }
        Command::List => {
            let session = session(cli.token)?;
            let reflections = client.list_reflections(&session).await?;
            if reflections.is_empty() {
                println!("No reflections yet.");
            }
            for reflection in &reflections {
                print_reflection(reflection);
            }
        }
        Command::Add { content, mood } => {
            let session = session(cli.token)?;
            let mut reflection = NewReflection::new(content);
            reflection.mood = mood;
            let created = client.create_reflection(&session, &reflection).await?;
            print_reflection(&created);
        }
        Command::Delete { id } => {
            let session = session(cli.token)?;
            client.delete_reflection(&session, &id).await?;
            println!("Deleted {}", id);
        }
        Command::Chat {
            message,
            interactive,
            api_key,
            assistant_name,
            assistant_tone,
            mood,
        } => {
            if message.is_none() && !interactive {
                return Err("Give a message or pass --interactive".into());
            }
            let session = session(cli.token)?;
            let credential = ProviderCredential::new(api_key);
            let reflections = client.list_reflections(&session).await?;
            let panel = ChatPanel::new(ChatOptions {
                assistant_name,
                assistant_tone,
                current_mood: mood,
                ..ChatOptions::default()
            });

            if let Some(message) = message {
                let reply = panel
                    .send(&client, &session, &credential, &message, &reflections)
                    .await?;
                print_reply(&reply.content, reply.grounded);
            }

            if interactive {
                let mut lines = BufReader::new(tokio::io::stdin()).lines();
                while let Some(line) = lines.next_line().await? {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match panel
                        .send(&client, &session, &credential, &line, &reflections)
                        .await
                    {
                        Ok(reply) => print_reply(&reply.content, reply.grounded),
                        Err(err) => eprintln!("error: {}", err),
                    }
                }
            }
        }
    }

    Ok(())
}
