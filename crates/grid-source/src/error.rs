use thiserror::Error;

/// Load failures: transport errors and malformed payloads. The row cache is
/// left untouched by callers until the next successful fetch.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("http status {status}: {message}")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Payload(#[from] grid_model::ModelError),
}

pub type Result<T> = std::result::Result<T, SourceError>;
