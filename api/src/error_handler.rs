use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use data_context::DataError;
use llm_client::{ConfigError, LlmClientError};
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum ApiError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / network / server ---
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("server error: {0}")]
    Server(#[source] std::io::Error),

    // --- Request handling ---
    /// Empty or whitespace-only question. Reported inside a 200 payload:
    /// the browser client reads the `error` field, not the status line.
    #[error("No question provided.")]
    EmptyQuestion,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Upstream(#[from] LlmClientError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmptyQuestion => StatusCode::OK,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // startup-only
            ApiError::Config(_) | ApiError::Bind(_) | ApiError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::Multipart(_) | ApiError::Data(_) | ApiError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Convert common Axum rejections to `ApiError`.
impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
