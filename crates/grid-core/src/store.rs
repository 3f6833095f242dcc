//! The state store: authoritative view state plus the row cache.
//!
//! All state changes go through the mutation entry points here; the
//! renderer only ever reads. Mutations that can change the filtered total
//! re-clamp the current page before any read.

use std::collections::BTreeSet;

use grid_model::{ColumnSet, FetchResult, Row, RowId};

use crate::query::{QueryOutput, filter_rows, run_query, total_pages};
use crate::state::{PageSize, Sort, SortDirection, ViewMode, ViewState};

/// Select-all control state, derived per render from the current page's ids
/// against the selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAll {
    All,
    Partial,
    None,
}

#[derive(Debug, Clone)]
pub struct TableState {
    pub view: ViewState,
    rows: Vec<Row>,
    columns: ColumnSet,
    loading: bool,
    server_total: u64,
    server_side: bool,
}

impl TableState {
    pub fn new(server_side: bool, page_size: PageSize) -> Self {
        Self {
            view: ViewState::new(page_size),
            rows: Vec::new(),
            columns: ColumnSet::default(),
            loading: false,
            server_total: 0,
            server_side,
        }
    }

    pub fn server_side(&self) -> bool {
        self.server_side
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: ColumnSet) {
        self.columns = columns;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the row cache wholesale after a successful fetch. When no
    /// schema was supplied, columns are inferred from the first row
    /// (auto-schema); `with_actions` appends the synthetic actions column.
    pub fn replace_rows(&mut self, result: FetchResult, with_actions: bool) {
        tracing::debug!(rows = result.rows.len(), total = result.total, "row cache replaced");
        self.server_total = result.total;
        self.rows = result.rows;
        if self.columns.is_empty()
            && let Some(first) = self.rows.first()
        {
            self.columns = ColumnSet::infer_from_row(first);
        }
        if with_actions && !self.columns.is_empty() {
            self.columns.ensure_actions();
        }
        self.clamp_page();
    }

    pub fn find_row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Remove a row from the local cache (after a confirmed delete in
    /// client mode), dropping it from the selection as well.
    pub fn remove_row(&mut self, id: RowId) {
        self.rows.retain(|row| row.id != id);
        self.view.selection.remove(&id);
        self.clamp_page();
    }

    /// Matched-row count under the current search: the pagination
    /// denominator.
    pub fn filtered_total(&self) -> usize {
        if self.server_side {
            self.server_total as usize
        } else {
            filter_rows(&self.rows, &self.columns, &self.view.search).len()
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_total(), self.view.page_size)
    }

    /// Evaluate the current view. In server-side mode the cache already is
    /// the page window and the server total drives pagination.
    pub fn query(&self) -> QueryOutput<'_> {
        if self.server_side {
            let total = self.server_total as usize;
            let pages = total_pages(total, self.view.page_size);
            QueryOutput {
                rows: self.rows.iter().collect(),
                total,
                page: self.view.page.clamp(1, pages),
                total_pages: pages,
            }
        } else {
            run_query(&self.rows, &self.columns, &self.view)
        }
    }

    /// Ids on the currently visible page, in display order.
    pub fn page_ids(&self) -> Vec<RowId> {
        self.query().rows.iter().map(|row| row.id).collect()
    }

    // --- mutation entry points -------------------------------------------

    pub fn set_page(&mut self, page: usize) {
        self.view.page = page.max(1);
        self.clamp_page();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.view.page_size = page_size;
        self.view.page = 1;
    }

    /// Sort by `field`: toggles direction when already sorted by it,
    /// otherwise sorts ascending. Resets to the first page.
    pub fn set_sort(&mut self, field: &str) {
        let direction = match &self.view.sort {
            Some(sort) if sort.field == field => sort.direction.toggled(),
            _ => SortDirection::Asc,
        };
        self.view.sort = Some(Sort {
            field: field.to_string(),
            direction,
        });
        self.view.page = 1;
    }

    pub fn set_search(&mut self, text: &str) {
        self.view.search = text.to_string();
        self.view.page = 1;
    }

    pub fn toggle_selection(&mut self, id: RowId) {
        if !self.view.selection.remove(&id) {
            self.view.selection.insert(id);
        }
    }

    pub fn set_all_selection(&mut self, ids: &[RowId], selected: bool) {
        if selected {
            self.view.selection.extend(ids.iter().copied());
        } else {
            for id in ids {
                self.view.selection.remove(id);
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.view.selection.clear();
    }

    pub fn selection(&self) -> &BTreeSet<RowId> {
        &self.view.selection
    }

    pub fn set_column_visible(&mut self, field: &str, visible: bool) -> bool {
        let changed = self.columns.set_visible(field, visible);
        if changed {
            self.clamp_page();
        }
        changed
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view.view_mode = self.view.view_mode.toggled();
    }

    /// Select-all tri-state for the current page.
    pub fn select_all_state(&self) -> SelectAll {
        let ids = self.page_ids();
        if ids.is_empty() {
            return SelectAll::None;
        }
        let selected = ids
            .iter()
            .filter(|id| self.view.selection.contains(id))
            .count();
        if selected == ids.len() {
            SelectAll::All
        } else if selected > 0 {
            SelectAll::Partial
        } else {
            SelectAll::None
        }
    }

    fn clamp_page(&mut self) {
        let pages = self.total_pages();
        self.view.page = self.view.page.clamp(1, pages);
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectAll, TableState};
    use crate::state::{PageSize, SortDirection};
    use grid_model::{CellValue, FetchResult, Row, RowId};

    fn row(id: i64, name: &str) -> Row {
        let mut row = Row::new(RowId(id));
        row.set("name", CellValue::from(name));
        row
    }

    fn seeded(page_size: PageSize) -> TableState {
        let mut state = TableState::new(false, page_size);
        let rows = (1..=5).map(|n| row(n, &format!("Item {n}"))).collect();
        state.replace_rows(FetchResult::from_rows(rows), false);
        state
    }

    #[test]
    fn page_clamps_after_mutations() {
        let mut state = seeded(PageSize::Limited(2));
        assert_eq!(state.total_pages(), 3);
        state.set_page(4);
        assert_eq!(state.view.page, 3);
        state.set_page(0);
        assert_eq!(state.view.page, 1);
    }

    #[test]
    fn page_size_all_is_one_page() {
        let mut state = seeded(PageSize::All);
        assert_eq!(state.total_pages(), 1);
        state.set_page(9);
        assert_eq!(state.view.page, 1);
        assert_eq!(state.query().rows.len(), 5);
    }

    #[test]
    fn sort_toggles_direction_on_same_field() {
        let mut state = seeded(PageSize::Limited(10));
        state.set_sort("name");
        assert_eq!(state.view.sort.as_ref().unwrap().direction, SortDirection::Asc);
        state.set_sort("name");
        assert_eq!(
            state.view.sort.as_ref().unwrap().direction,
            SortDirection::Desc
        );
        state.set_sort("id");
        let sort = state.view.sort.as_ref().unwrap();
        assert_eq!(sort.field, "id");
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn selection_survives_search_sort_and_page_size_changes() {
        let mut state = seeded(PageSize::Limited(2));
        state.toggle_selection(RowId(4));
        state.set_search("Item 1");
        state.set_sort("name");
        state.set_page_size(PageSize::Limited(3));
        assert!(state.selection().contains(&RowId(4)));
    }

    #[test]
    fn select_all_state_tracks_visible_page() {
        let mut state = seeded(PageSize::Limited(2));
        assert_eq!(state.select_all_state(), SelectAll::None);
        let ids = state.page_ids();
        state.toggle_selection(ids[0]);
        assert_eq!(state.select_all_state(), SelectAll::Partial);
        state.set_all_selection(&ids, true);
        assert_eq!(state.select_all_state(), SelectAll::All);
        state.set_all_selection(&ids, false);
        assert_eq!(state.select_all_state(), SelectAll::None);
    }

    #[test]
    fn removing_a_row_drops_it_from_selection_and_reclamps() {
        let mut state = seeded(PageSize::Limited(2));
        state.set_page(3);
        state.toggle_selection(RowId(5));
        state.remove_row(RowId(5));
        assert!(!state.selection().contains(&RowId(5)));
        assert_eq!(state.view.page, 2);
    }

    #[test]
    fn server_side_query_uses_server_total() {
        let mut state = TableState::new(true, PageSize::Limited(2));
        state.replace_rows(
            FetchResult {
                rows: vec![row(1, "a"), row(2, "b")],
                total: 9,
            },
            false,
        );
        let output = state.query();
        assert_eq!(output.total, 9);
        assert_eq!(output.total_pages, 5);
        assert_eq!(output.rows.len(), 2);
    }
}
