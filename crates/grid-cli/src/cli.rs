//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use grid_core::PageSize;
use grid_export::ExportFormat;

#[derive(Parser)]
#[command(
    name = "gridrow",
    version,
    about = "Inspect and export tabular datasets",
    long_about = "Load rows from a JSON file or an HTTP endpoint, apply search, sort\n\
                  and pagination, and render the result as a table, cards, or an\n\
                  export file (CSV, workbook XML, JSON)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a page of the dataset to the terminal.
    View(QueryArgs),

    /// Write the matching rows to an export file.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct QueryArgs {
    /// JSON file path or HTTP URL serving the rows.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Filter rows by a case-insensitive substring.
    #[arg(long)]
    pub search: Option<String>,

    /// Sort by this column.
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort direction.
    #[arg(long, value_enum, default_value = "asc")]
    pub order: OrderArg,

    /// Page to display (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page, or "all".
    #[arg(long = "page-size", default_value = "10")]
    pub page_size: PageSize,

    /// Show only these columns (comma-separated field names).
    #[arg(long, value_delimiter = ',', value_name = "FIELDS")]
    pub columns: Vec<String>,

    /// Render as cards instead of a table.
    #[arg(long)]
    pub cards: bool,

    /// Treat the endpoint as server-side (it paginates and filters itself).
    #[arg(long = "server-side")]
    pub server_side: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Export format.
    #[arg(long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Directory the export file is written into.
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Xls,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => Self::Csv,
            FormatArg::Xls => Self::Workbook,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
