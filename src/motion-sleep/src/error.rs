use motion_sleep_codec::CodecError;
use motion_sleep_types::SleepWindowError;
use thiserror::Error;

/// Failure of the motion activity source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Motion activity is not available")]
    Unavailable,
    #[error("Motion activity access was denied")]
    Unauthorized,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[derive(Debug, Error)]
pub enum MotionSleepError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("Invalid arguments: {0}")]
    Codec(CodecError),
    #[error(transparent)]
    InvalidSleepWindow(#[from] SleepWindowError),
    #[error("{0} is not supported")]
    UnsupportedMethod(String),
    #[error("No sleep session found")]
    NoSleepSession,
}

/// Keeps a rejected sleep window distinct from other argument errors.
impl From<CodecError> for MotionSleepError {
    fn from(error: CodecError) -> Self {
        match error {
            CodecError::InvalidSleepWindow(error) => Self::InvalidSleepWindow(error),
            error => Self::Codec(error),
        }
    }
}
