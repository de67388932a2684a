//! Client for an OpenAI-compatible chat-completion API.
//!
//! Minimal, non-streaming client used by the HTTP layer to turn an
//! assembled prompt into an answer. Configuration comes strictly from
//! environment variables, is validated once at construction, and failures
//! are normalized into the unified error types in [`error_handler`].

pub mod config;
pub mod error_handler;
mod service;

pub use config::CompletionConfig;
pub use error_handler::{ConfigError, LlmClientError, Result};
pub use service::OpenAiService;
