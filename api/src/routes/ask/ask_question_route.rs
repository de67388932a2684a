//! POST /api/ask — answers a question over the current session data.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use data_context::{DEFAULT_SYSTEM, build_prompt};

use crate::{
    core::app_state::AppState,
    error_handler::{ApiError, ApiResult},
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /api/ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"Which column has the highest average?"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> ApiResult<Json<AskResponse>> {
    let Json(body) = body?;

    let question = body.question.trim();
    if question.is_empty() {
        return Err(ApiError::EmptyQuestion);
    }

    // Snapshot the session under the read lock; the lock must not be held
    // across the upstream call.
    let session = state.session.read().await.clone();
    let prompt = build_prompt(question, &session);

    info!(
        prompt_len = prompt.len(),
        has_dataset = session.dataset().is_some(),
        has_text = session.text().is_some(),
        "forwarding question to completion API"
    );

    let answer = state.llm.generate(&prompt, Some(DEFAULT_SYSTEM)).await?;

    Ok(Json(AskResponse { answer }))
}
