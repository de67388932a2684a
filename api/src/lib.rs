//! HTTP surface for the data-chat backend.
//!
//! Endpoints:
//! - GET  /            (browser client page)
//! - GET  /static/*    (client assets)
//! - POST /api/upload  (multipart upload of CSV and/or text data)
//! - POST /api/ask     (question over the uploaded data)

use std::{env, sync::Arc};

mod core;
mod error_handler;
mod routes;

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{ApiError, ApiResult};

use axum::{Router, routing::post};
use tokio::signal;
use tower_http::services::{ServeDir, ServeFile};

use crate::routes::{ask::ask_question_route::ask_question, upload_data_route::upload_data};

/// Builds the application router over a shared state handle.
pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
    let index = ServeFile::new(format!("{static_dir}/index.html"));

    Router::new()
        .route_service("/", index)
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/api/upload", post(upload_data))
        .route("/api/ask", post(ask_question))
        .with_state(state)
}

/// Loads state from the environment, binds, and serves until Ctrl+C.
///
/// A missing or malformed `AIPROXY_TOKEN` fails here, before the listener
/// is bound: credential problems are boot errors, not per-request ones.
pub async fn start() -> ApiResult<()> {
    let state = Arc::new(AppState::from_env()?);
    let app = router(state);

    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".into());
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(ApiError::Bind)?;

    tracing::info!(address = %host_url, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ApiError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
