pub mod csv;
pub mod error;
pub mod json;
pub mod table;
pub mod workbook;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;
use grid_core::TableState;

pub use crate::csv::write_csv;
pub use crate::error::{ExportError, Result};
pub use crate::json::write_json;
pub use crate::table::ExportTable;
pub use crate::workbook::write_workbook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Workbook,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Workbook => "xls",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xls" | "excel" | "workbook" => Ok(Self::Workbook),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// Default file name for an export: `table-export-<instance>-<date>.<ext>`
/// with the local date.
pub fn export_file_name(instance: &str, format: ExportFormat) -> String {
    format!(
        "table-export-{instance}-{}.{}",
        Local::now().format("%Y-%m-%d"),
        format.extension()
    )
}

pub fn write_export<W: std::io::Write>(
    table: &ExportTable,
    format: ExportFormat,
    writer: W,
) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(table, writer),
        ExportFormat::Workbook => write_workbook(table, writer),
        ExportFormat::Json => write_json(table, writer),
    }
}

/// Export the current view into `dir` under the default file name. Nothing
/// is written when no rows match.
pub fn export_to_dir(
    state: &TableState,
    instance: &str,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf> {
    let table = ExportTable::from_state(state)?;
    let path = dir.join(export_file_name(instance, format));
    let file = File::create(&path)?;
    write_export(&table, format, BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows = table.rows.len(), "export written");
    Ok(path)
}
