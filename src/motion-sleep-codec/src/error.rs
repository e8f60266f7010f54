use motion_sleep_types::SleepWindowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),
    #[error("Unknown motion confidence: {0}")]
    InvalidConfidence(i64),
    #[error("Session must end after it starts ({start} >= {end})")]
    InvalidSessionInterval { start: i64, end: i64 },
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    InvalidSleepWindow(#[from] SleepWindowError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
