//! Configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use groq_client::GroqConfig;

/// API server configuration.
#[derive(Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// HMAC secret for bearer tokens.
    pub jwt_secret: String,
    /// How long an issued token stays valid.
    pub token_ttl: Duration,
    /// bcrypt cost for new password hashes.
    pub bcrypt_cost: u32,
    /// Number of recent reflections given to the assistant.
    pub context_reflections: u32,
    /// Assistant name used when a chat request does not name one.
    pub assistant_name: String,
    /// Assistant tone used when a chat request does not give one.
    pub assistant_tone: String,
    /// Completion service settings.
    pub groq: GroqConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"[redacted]")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("context_reflections", &self.context_reflections)
            .field("assistant_name", &self.assistant_name)
            .field("assistant_tone", &self.assistant_tone)
            .field("groq", &self.groq)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `REFLECT_ADDR` | Server bind address | `127.0.0.1:3000` |
    /// | `DATABASE_URL` | SQLite database URL | `sqlite:reflect.db?mode=rwc` |
    /// | `JWT_SECRET` | Token signing secret | (required) |
    /// | `TOKEN_TTL_DAYS` | Token validity in days | `7` |
    /// | `BCRYPT_COST` | Password hash cost (4-31) | `10` |
    /// | `CONTEXT_REFLECTIONS` | Reflections sent as chat context | `10` |
    /// | `ASSISTANT_NAME` | Default assistant name | `Second Brain` |
    /// | `ASSISTANT_TONE` | Default assistant tone | `helpful` |
    ///
    /// Completion service variables are read by [`GroqConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("REFLECT_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:reflect.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let ttl_days: u64 = parse_positive("TOKEN_TTL_DAYS", 7)?;
        let token_ttl = ttl_days
            .checked_mul(SECS_PER_DAY)
            .map(Duration::from_secs)
            .ok_or(ConfigError::InvalidValue {
                var: "TOKEN_TTL_DAYS",
                value: ttl_days.to_string(),
            })?;

        let bcrypt_cost: u32 = parse_var("BCRYPT_COST", 10)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                var: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let context_reflections: u32 = parse_positive("CONTEXT_REFLECTIONS", 10)?;

        let assistant_name =
            env::var("ASSISTANT_NAME").unwrap_or_else(|_| "Second Brain".to_string());
        let assistant_tone = env::var("ASSISTANT_TONE").unwrap_or_else(|_| "helpful".to_string());

        Ok(Self {
            addr,
            database_url,
            jwt_secret,
            token_ttl,
            bcrypt_cost,
            context_reflections,
            assistant_name,
            assistant_tone,
            groq: GroqConfig::from_env(),
        })
    }
}

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Like [`parse_var`], but zero is rejected too.
fn parse_positive<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialEq + ToString,
{
    let value = parse_var(var, default)?;
    if value == T::default() {
        return Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn parse_var<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid REFLECT_ADDR format")]
    InvalidAddr,

    #[error("JWT_SECRET environment variable is required")]
    MissingJwtSecret,

    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}
