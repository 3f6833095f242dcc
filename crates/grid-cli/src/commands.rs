//! Subcommand execution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use grid_component::{TableComponent, TableOptions};
use grid_core::ViewMode;
use grid_crud::HttpTransport;
use grid_model::decode_payload;
use grid_source::{DataSource, HttpSource, MemorySource};

use crate::cli::{ExportArgs, OrderArg, QueryArgs};

pub async fn run_view(args: &QueryArgs) -> Result<String> {
    let table = build_table(args).await?;
    Ok(table.render_text())
}

pub async fn run_export(args: &ExportArgs) -> Result<PathBuf> {
    let mut table = build_table(&args.query).await?;
    let path = table.export(args.format.into(), &args.out_dir)?;
    Ok(path)
}

async fn build_table(
    args: &QueryArgs,
) -> Result<TableComponent<Box<dyn DataSource>, HttpTransport>> {
    let source = open_source(&args.source, args.server_side)?;
    let options = TableOptions {
        instance: instance_name(&args.source),
        server_side: args.server_side,
        default_page_size: args.page_size,
        default_view_mode: if args.cards {
            ViewMode::Card
        } else {
            ViewMode::Table
        },
        ..TableOptions::default()
    };
    let mut table = TableComponent::new(source, HttpTransport::new(""), options)?;

    // Columns are only known after the first load.
    table.refresh().await?;
    if let Some(search) = &args.search {
        table.search(search).await?;
    }
    if let Some(field) = &args.sort {
        table.sort_by(field).await?;
        if matches!(args.order, OrderArg::Desc) {
            table.sort_by(field).await?;
        }
    }
    table.set_page(args.page).await?;
    if !args.columns.is_empty() {
        apply_column_selection(&mut table, &args.columns);
    }
    Ok(table)
}

fn open_source(source: &str, server_side: bool) -> Result<Box<dyn DataSource>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return Ok(Box::new(HttpSource::new(source, server_side)));
    }
    let text = std::fs::read_to_string(source).with_context(|| format!("read {source}"))?;
    let body = serde_json::from_str(&text).with_context(|| format!("parse {source}"))?;
    let result = decode_payload(body, false)?;
    Ok(Box::new(MemorySource::new(result.rows)))
}

fn apply_column_selection(
    table: &mut TableComponent<Box<dyn DataSource>, HttpTransport>,
    fields: &[String],
) {
    table.toggle_all_columns(false);
    for field in fields {
        if !table.set_column_visible(field, true) && field != "id" {
            tracing::warn!(field, "unknown column in --columns");
        }
    }
}

fn instance_name(source: &str) -> String {
    let stem = Path::new(source)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("data");
    let cleaned: String = stem
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '-' })
        .collect();
    let cleaned = cleaned.trim_matches('-').to_string();
    if cleaned.is_empty() {
        "data".to_string()
    } else {
        cleaned
    }
}
