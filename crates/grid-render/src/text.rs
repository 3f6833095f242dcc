//! Terminal binding of the view tree via comfy-table.

use std::fmt::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use grid_core::{SelectAll, ViewMode};

use crate::pagination::{PageItem, PaginationView};
use crate::view::{CardBody, CardView, GridView, HeaderCell, SortMarker, TableBody, TableView};

/// Render whichever target `view.mode` selects, with the page-info line and
/// pagination controls underneath.
pub fn write_grid(view: &GridView) -> String {
    let mut out = match view.mode {
        ViewMode::Table => write_table(&view.table),
        ViewMode::Card => write_cards(&view.card),
    };
    let (info, pagination) = match view.mode {
        ViewMode::Table => (&view.table.page_info, &view.table.pagination),
        ViewMode::Card => (&view.card.page_info, &view.card.pagination),
    };
    let _ = writeln!(out, "{info}");
    if let Some(pagination) = pagination {
        let _ = writeln!(out, "{}", write_pagination(pagination));
    }
    out
}

pub fn write_table(view: &TableView) -> String {
    let mut table = Table::new();
    apply_table_style(&mut table);

    let mut header = vec![Cell::new(select_all_marker(view.header.select_all))];
    header.extend(view.header.cells.iter().map(header_cell));
    if view.header.actions {
        header.push(
            Cell::new("Actions")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        );
    }
    let width = header.len();
    table.set_header(header);

    match &view.body {
        TableBody::Rows(rows) => {
            for row in rows {
                let mut cells = vec![Cell::new(selected_marker(row.selected))];
                cells.extend(row.cells.iter().map(|cell| Cell::new(&cell.text)));
                if view.header.actions {
                    let labels = row
                        .actions
                        .iter()
                        .map(|action| action.def.label.as_str())
                        .collect::<Vec<_>>()
                        .join(" | ");
                    cells.push(Cell::new(labels));
                }
                table.add_row(cells);
            }
        }
        TableBody::Empty { message, .. } => {
            table.add_row(spanning_row(message, width, Color::DarkGrey));
        }
        TableBody::Error { message, .. } => {
            table.add_row(spanning_row(message, width, Color::Red));
        }
    }

    format!("{table}\n")
}

/// Card mode: one label/value block per row, separated by blank lines.
pub fn write_cards(view: &CardView) -> String {
    let mut out = String::new();
    match &view.body {
        CardBody::Cards(cards) => {
            for card in cards {
                let _ = writeln!(out, "{} #{}", selected_marker(card.selected), card.id);
                for (label, value) in &card.fields {
                    let _ = writeln!(out, "  {label}: {value}");
                }
                if !card.actions.is_empty() {
                    let labels = card
                        .actions
                        .iter()
                        .map(|action| action.def.label.as_str())
                        .collect::<Vec<_>>()
                        .join(" | ");
                    let _ = writeln!(out, "  [{labels}]");
                }
                out.push('\n');
            }
        }
        CardBody::Empty { message } | CardBody::Error { message } => {
            let _ = writeln!(out, "{message}");
        }
    }
    out
}

pub fn write_pagination(view: &PaginationView) -> String {
    let mut parts = Vec::new();
    parts.push(if view.prev_enabled { "<" } else { "(<)" }.to_string());
    for item in &view.items {
        parts.push(match item {
            PageItem::Number {
                page,
                current: true,
            } => format!("[{page}]"),
            PageItem::Number { page, .. } => page.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        });
    }
    parts.push(if view.next_enabled { ">" } else { "(>)" }.to_string());
    parts.join(" ")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(cell: &HeaderCell) -> Cell {
    let label = match cell.sort {
        SortMarker::Asc => format!("{} ▲", cell.title),
        SortMarker::Desc => format!("{} ▼", cell.title),
        SortMarker::Sortable | SortMarker::Unsortable => cell.title.clone(),
    };
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn select_all_marker(state: SelectAll) -> &'static str {
    match state {
        SelectAll::All => "[x]",
        SelectAll::Partial => "[-]",
        SelectAll::None => "[ ]",
    }
}

fn selected_marker(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

fn spanning_row(message: &str, width: usize, color: Color) -> Vec<Cell> {
    let mut cells = vec![Cell::new(message).fg(color)];
    cells.resize_with(width, || Cell::new(""));
    cells
}
