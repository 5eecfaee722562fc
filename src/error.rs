use chrono::NaiveDate;
use thiserror::Error;

/// Checklist error types
#[derive(Error, Debug)]
pub enum ChecklistError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidDate(String),

    #[error("Invalid dates: End date ({end}) must be later than start date ({start})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Print error: {0}")]
    Print(String),

    #[error("Confirmation aborted: no more input")]
    Aborted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for checklist operations
pub type Result<T> = std::result::Result<T, ChecklistError>;
