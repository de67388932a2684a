//! Prompt builder: the question first, then labeled data segments.

use crate::session::SessionState;

/// System instruction sent with every completion request.
pub const DEFAULT_SYSTEM: &str =
    "You are a data analyst who answers questions about uploaded data.";

/// Number of data rows of the dataset included in the prompt preview.
/// Fixed policy, not configuration.
const PREVIEW_ROWS: usize = 5;

const CSV_LABEL: &str = "CSV Data:";
const TEXT_LABEL: &str = "Text Data:";

/// Builds the completion prompt for `question` over the current session.
///
/// Segments, joined by a blank line:
/// 1. the trimmed question
/// 2. `CSV Data:` plus a fixed-width preview of the first [`PREVIEW_ROWS`]
///    rows, when a dataset is present
/// 3. `Text Data:` plus the full text blob, when one is present
///
/// With an empty session the prompt is exactly the question.
pub fn build_prompt(question: &str, session: &SessionState) -> String {
    let mut segments = vec![question.trim().to_string()];

    if let Some(dataset) = session.dataset() {
        segments.push(format!("{CSV_LABEL}\n{}", dataset.preview(PREVIEW_ROWS)));
    }
    if let Some(text) = session.text() {
        segments.push(format!("{TEXT_LABEL}\n{text}"));
    }

    segments.join("\n\n")
}
