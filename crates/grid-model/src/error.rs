use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate column field: {0}")]
    DuplicateColumn(String),
    #[error("malformed payload: expected a row array or {{rows, total}}")]
    MalformedPayload,
    #[error("server-side payload must be {{rows, total}}")]
    MissingTotal,
}

pub type Result<T> = std::result::Result<T, ModelError>;
