use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum CrudError {
    /// A mutation was requested without the route it needs.
    #[error("missing route for {0}")]
    MissingRoute(&'static str),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server rejected the submitted fields (HTTP 422).
    #[error("validation failed")]
    Validation(ValidationErrors),
    /// Any other non-success response.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Payload(#[from] grid_model::ModelError),
    /// The row to edit is neither cached nor fetchable.
    #[error("row {0} not found")]
    RowNotFound(grid_model::RowId),
}

pub type Result<T, E = CrudError> = std::result::Result<T, E>;
