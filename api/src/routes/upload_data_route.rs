//! POST /api/upload — stores CSV and/or text data for later questions.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use data_context::{DataError, TabularData};

use crate::{core::app_state::AppState, error_handler::ApiResult};

/// Response payload for /api/upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Human-readable confirmation of what was stored.
    pub answer: String,
}

/// Handler: POST /api/upload
///
/// Accepts the optional multipart parts `data` (CSV), `text`, and `image`.
/// The image part is read and dropped: the interface accepts it, nothing
/// downstream consumes it. Empty parts (file inputs left blank in the
/// form) are skipped.
///
/// Parsing happens before the session lock is taken, so a malformed file
/// leaves the corresponding slot untouched.
#[instrument(name = "upload_data_route", skip_all)]
pub async fn upload_data(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut dataset: Option<TabularData> = None;
    let mut text: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            continue;
        }
        match name.as_str() {
            "data" => dataset = Some(TabularData::from_csv_bytes(&bytes)?),
            "text" => {
                text = Some(String::from_utf8(bytes.to_vec()).map_err(DataError::TextDecode)?)
            }
            "image" => info!(len = bytes.len(), "image part accepted and ignored"),
            other => warn!(field = %other, "unknown multipart field skipped"),
        }
    }

    let mut stored = Vec::new();
    {
        let mut session = state.session.write().await;
        if let Some(dataset) = dataset {
            stored.push(format!(
                "CSV with {} rows and {} columns",
                dataset.row_count(),
                dataset.column_count()
            ));
            session.set_dataset(dataset);
        }
        if let Some(text) = text {
            stored.push(format!("text file ({} characters)", text.chars().count()));
            session.set_text(text);
        }
    }

    let answer = if stored.is_empty() {
        "Nothing stored: no CSV or text file in the upload.".to_string()
    } else {
        format!("Upload complete: {}.", stored.join(", "))
    };

    info!(%answer, "upload handled");

    Ok(Json(UploadResponse { answer }))
}
