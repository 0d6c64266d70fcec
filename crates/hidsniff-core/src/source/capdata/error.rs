use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record too short: need {needed} byte tokens, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid byte token '{token}'")]
    InvalidToken { token: String },
}

#[derive(Debug, Error)]
pub enum CapdataSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("capture process error ({context}): {message}")]
    Capture {
        context: &'static str,
        message: String,
    },
    #[error(transparent)]
    Record(#[from] RecordError),
}
