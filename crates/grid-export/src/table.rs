//! The exportable view of the table: visible data columns re-keyed to
//! their display titles, over the full matched row set.

use grid_core::{TableState, filter_rows, sort_rows};

use crate::error::{ExportError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    /// Column display titles, in column order.
    pub headers: Vec<String>,
    /// One entry per row, values aligned with `headers`.
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Snapshot the current view for export. All rows matching the current
    /// search are included, in the current sort order; pagination does not
    /// apply. Hidden columns and the actions column are excluded. Fails
    /// with `NoData` when nothing matches.
    pub fn from_state(state: &TableState) -> Result<Self> {
        let columns = state.columns();
        let mut matched = if state.server_side() {
            state.rows().iter().collect()
        } else {
            filter_rows(state.rows(), columns, &state.view.search)
        };
        if !state.server_side()
            && let Some(sort) = &state.view.sort
        {
            sort_rows(&mut matched, &sort.field, sort.direction);
        }
        if matched.is_empty() {
            return Err(ExportError::NoData);
        }
        let headers: Vec<String> = columns
            .visible_data()
            .map(|column| column.title.clone())
            .collect();
        let rows = matched
            .iter()
            .map(|row| {
                columns
                    .visible_data()
                    .map(|column| row.text(&column.field))
                    .collect()
            })
            .collect();
        Ok(Self { headers, rows })
    }
}
