use data_context::SessionState;
use llm_client::{CompletionConfig, OpenAiService};
use tokio::sync::RwLock;

use crate::error_handler::ApiResult;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// The single session slot every caller shares. Uploads take the write
    /// lock, asks snapshot under the read lock; last completed write wins.
    pub session: RwLock<SessionState>,
    /// Client for the completion API, constructed once at startup.
    pub llm: OpenAiService,
}

impl AppState {
    /// Load shared state from environment variables.
    pub fn from_env() -> ApiResult<Self> {
        let cfg = CompletionConfig::from_env()?;
        let llm = OpenAiService::new(cfg)?;
        Ok(Self::new(llm))
    }

    /// Builds state around an already-constructed client, with an empty
    /// session.
    pub fn new(llm: OpenAiService) -> Self {
        Self {
            session: RwLock::new(SessionState::default()),
            llm,
        }
    }
}
