//! Completion model configuration loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `AIPROXY_TOKEN`    = API credential (mandatory; absence is fatal)
//! - `OPENAI_BASE_URL`  = API base including the version path segment
//!   (default [`DEFAULT_ENDPOINT`])
//! - `LLM_MODEL`        = model identifier (default [`DEFAULT_MODEL`])
//! - `LLM_MAX_TOKENS`   = completion token cap (default 1000)
//! - `LLM_TIMEOUT_SECS` = request timeout in seconds (default 60)

use crate::error_handler::{ConfigError, env_opt_u32, env_opt_u64, must_env};

/// Default API base. The completions path is appended by the service.
pub const DEFAULT_ENDPOINT: &str = "https://api.proxy.sanand.workers.dev/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const DEFAULT_MAX_TOKENS: u32 = 1000;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the completion client.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Model identifier string (e.g., `"gpt-4o-mini"`).
    pub model: String,

    /// API base URL including the version segment (e.g., `.../v1`).
    pub endpoint: String,

    /// API credential, sent as a bearer token.
    pub api_key: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature; `None` leaves the provider default.
    pub temperature: Option<f32>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl CompletionConfig {
    /// Builds the configuration from the environment.
    ///
    /// # Errors
    /// - [`ConfigError::MissingVar`] when `AIPROXY_TOKEN` is absent or empty
    /// - [`ConfigError::InvalidNumber`] when a numeric override fails to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = must_env("AIPROXY_TOKEN")?;

        let endpoint = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let model = std::env::var("LLM_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?.unwrap_or(DEFAULT_MAX_TOKENS);
        let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            model,
            endpoint,
            api_key,
            max_tokens,
            temperature: None,
            timeout_secs,
        })
    }
}
