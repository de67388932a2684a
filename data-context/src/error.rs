//! Typed error for the data-context crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// Malformed CSV input (ragged rows, broken quoting, invalid UTF-8 cells).
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// CSV input had no header row at all.
    #[error("CSV file contains no header row")]
    EmptyCsv,

    /// Uploaded text was not valid UTF-8.
    #[error("text decode error: {0}")]
    TextDecode(#[from] std::string::FromUtf8Error),
}
