//! Client-side query pipeline: search, then sort, then paginate.

use grid_model::{ColumnSet, Row};

use crate::sort::natural_cmp;
use crate::state::{PageSize, SortDirection, ViewState};

/// One evaluated view over the cached row set.
#[derive(Debug)]
pub struct QueryOutput<'a> {
    /// The page window, in display order.
    pub rows: Vec<&'a Row>,
    /// Matched-row count (post-search, pre-slice).
    pub total: usize,
    /// Effective page after clamping.
    pub page: usize,
    pub total_pages: usize,
}

/// Rows matching the search text: any visible non-action column whose
/// stringified value contains the lowered search text. Empty text matches
/// everything in insertion order.
pub fn filter_rows<'a>(rows: &'a [Row], columns: &ColumnSet, search: &str) -> Vec<&'a Row> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| {
            columns
                .visible_data()
                .any(|column| row.text(&column.field).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable natural sort over the matched rows. Missing field values compare
/// as the empty string, sorting first in ascending order.
pub fn sort_rows(rows: &mut [&Row], field: &str, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = natural_cmp(&a.text(field), &b.text(field));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Page count for a total under a page size; never less than one page.
pub fn total_pages(total: usize, page_size: PageSize) -> usize {
    match page_size.numeric() {
        Some(size) => total.div_ceil(size).max(1),
        None => 1,
    }
}

/// Run the full pipeline against the cached row set. The requested page is
/// clamped into `[1, total_pages]`; callers that own a ViewState should
/// write the effective page back.
pub fn run_query<'a>(rows: &'a [Row], columns: &ColumnSet, state: &ViewState) -> QueryOutput<'a> {
    let mut matched = filter_rows(rows, columns, &state.search);
    if let Some(sort) = &state.sort {
        sort_rows(&mut matched, &sort.field, sort.direction);
    }
    let total = matched.len();
    let pages = total_pages(total, state.page_size);
    let page = state.page.clamp(1, pages);
    let window = match state.page_size.numeric() {
        Some(size) => {
            let start = (page - 1) * size;
            let end = (start + size).min(total);
            if start < total {
                matched[start..end].to_vec()
            } else {
                Vec::new()
            }
        }
        None => matched,
    };
    QueryOutput {
        rows: window,
        total,
        page,
        total_pages: pages,
    }
}
