//! Configuration for GroqClient.

use std::env;
use std::time::Duration;

/// Default completion service base URL.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai";

/// Default model.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// Default round-trip timeout, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for GroqClient.
#[derive(Debug, Clone, PartialEq)]
pub struct GroqConfig {
    /// Base URL; `/v1/chat/completions` is appended.
    pub api_url: String,

    /// Model name to request.
    pub model: String,

    /// Maximum tokens for response.
    pub max_tokens: Option<u32>,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Whole round-trip timeout. Exceeding it is reported as unavailable.
    pub timeout: Duration,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: None,
            temperature: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GroqConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `GROQ_API_URL` - API URL (default: https://api.groq.com/openai)
    /// - `GROQ_MODEL` - Model name (default: meta-llama/llama-4-scout-17b-16e-instruct)
    /// - `GROQ_MAX_TOKENS` - Max tokens (default: provider default)
    /// - `GROQ_TEMPERATURE` - Temperature (default: provider default)
    /// - `GROQ_TIMEOUT_SECS` - Round-trip timeout (default: 30)
    ///
    /// Unparsable numbers fall back to their defaults.
    pub fn from_env() -> Self {
        let api_url = env::var("GROQ_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let model = env::var("GROQ_MODEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let max_tokens = env::var("GROQ_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        let temperature = env::var("GROQ_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        let timeout = env::var("GROQ_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            api_url,
            model,
            max_tokens,
            temperature,
            timeout,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> GroqConfigBuilder {
        GroqConfigBuilder::default()
    }

    /// Full chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_url.trim_end_matches('/'))
    }
}

/// Builder for GroqConfig.
#[derive(Debug, Default)]
pub struct GroqConfigBuilder {
    config: GroqConfig,
}

impl GroqConfigBuilder {
    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the round-trip timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GroqConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GroqConfig::default();

        assert_eq!(config.api_url, "https://api.groq.com/openai");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, None);
        assert_eq!(config.temperature, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let config = GroqConfig::builder().api_url("http://127.0.0.1:9000/").build();
        assert_eq!(
            config.completions_url(),
            "http://127.0.0.1:9000/v1/chat/completions"
        );
    }

    #[test]
    fn test_builder_all_options() {
        let config = GroqConfig::builder()
            .api_url("https://custom.api.com")
            .model("llama-3.3-70b-versatile")
            .max_tokens(512)
            .temperature(0.5)
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.temperature, Some(0.5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_groq_vars() {
            std::env::remove_var("GROQ_API_URL");
            std::env::remove_var("GROQ_MODEL");
            std::env::remove_var("GROQ_MAX_TOKENS");
            std::env::remove_var("GROQ_TEMPERATURE");
            std::env::remove_var("GROQ_TIMEOUT_SECS");
        }

        // Nothing set: defaults
        clear_all_groq_vars();
        assert_eq!(GroqConfig::from_env(), GroqConfig::default());

        // Everything set
        std::env::set_var("GROQ_API_URL", "https://test.api.com");
        std::env::set_var("GROQ_MODEL", "test-model");
        std::env::set_var("GROQ_MAX_TOKENS", "2048");
        std::env::set_var("GROQ_TEMPERATURE", "0.9");
        std::env::set_var("GROQ_TIMEOUT_SECS", "12");

        let config = GroqConfig::from_env();
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.max_tokens, Some(2048));
        assert_eq!(config.temperature, Some(0.9));
        assert_eq!(config.timeout, Duration::from_secs(12));

        // Garbage numbers fall back
        clear_all_groq_vars();
        std::env::set_var("GROQ_MAX_TOKENS", "lots");
        std::env::set_var("GROQ_TIMEOUT_SECS", "-1");
        let config = GroqConfig::from_env();
        assert_eq!(config.max_tokens, None);
        assert_eq!(config.timeout, Duration::from_secs(30));

        clear_all_groq_vars();
    }
}
