use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComponentError {
    #[error(transparent)]
    Load(#[from] grid_source::SourceError),
    #[error(transparent)]
    Crud(#[from] grid_crud::CrudError),
    #[error(transparent)]
    Export(#[from] grid_export::ExportError),
    #[error("invalid column schema: {0}")]
    Schema(#[from] grid_model::ModelError),
    /// An operation was invoked while its feature flag is off.
    #[error("{0} is disabled")]
    Disabled(&'static str),
    #[error("no edit session is open")]
    NoEditSession,
    #[error("no delete is pending")]
    NoPendingDelete,
    #[error("selection is empty")]
    EmptySelection,
}

pub type Result<T, E = ComponentError> = std::result::Result<T, E>;
