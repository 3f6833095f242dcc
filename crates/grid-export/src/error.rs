use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export; no file is written.
    #[error("no data to export")]
    NoData,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ExportError> = std::result::Result<T, E>;
