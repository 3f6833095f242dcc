//! The table controller.
//!
//! Every operation mutates the store, then either refetches (server mode)
//! or lets the next render recompute locally (client mode). Construction
//! returns an explicit handle; nothing is registered globally.

use std::path::{Path, PathBuf};

use grid_core::{PageSize, TableState, ViewMode};
use grid_crud::{
    CrudClient, CrudError, EditSession, ModalHost, Notifier, SilentHost, Transport,
    ValidationErrors,
};
use grid_export::{ExportFormat, export_to_dir};
use grid_model::{ActionBehavior, ActionDef, ColumnSet, RowId};
use grid_render::{GridView, RenderConfig, render, render_load_error, write_grid};
use grid_source::{DataSource, FetchQuery};

use crate::debounce::Debouncer;
use crate::error::{ComponentError, Result};
use crate::options::TableOptions;

const LOAD_ERROR_MESSAGE: &str = "Error loading data";

/// Result of a save attempt. A rejected save keeps the edit session open
/// with its errors filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Rejected,
}

pub struct TableComponent<S: DataSource, T: Transport> {
    options: TableOptions,
    state: TableState,
    source: S,
    crud: CrudClient<T>,
    host: Box<dyn ModalHost + Send>,
    notifier: Box<dyn Notifier + Send>,
    edit_session: Option<EditSession>,
    pending_delete: Option<RowId>,
    load_error: Option<String>,
    fetch_seq: u64,
    debouncer: Debouncer,
}

impl<S: DataSource, T: Transport> TableComponent<S, T> {
    pub fn new(source: S, transport: T, options: TableOptions) -> Result<Self> {
        let options = options.validated();
        let mut state = TableState::new(options.server_side, options.default_page_size);
        state.set_view_mode(options.default_view_mode);
        if let Some(columns) = options.columns.clone() {
            let mut set = ColumnSet::from_schema(columns)?;
            if options.has_actions() {
                set.ensure_actions();
            }
            state.set_columns(set);
        }
        let crud = CrudClient::new(options.endpoints.clone(), transport);
        let debouncer = Debouncer::new(options.search_debounce);
        Ok(Self {
            options,
            state,
            source,
            crud,
            host: Box::new(SilentHost),
            notifier: Box::new(SilentHost),
            edit_session: None,
            pending_delete: None,
            load_error: None,
            fetch_seq: 0,
            debouncer,
        })
    }

    #[must_use]
    pub fn with_host(mut self, host: Box<dyn ModalHost + Send>) -> Self {
        self.host = host;
        self
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier + Send>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit_session.as_ref()
    }

    pub fn pending_delete(&self) -> Option<RowId> {
        self.pending_delete
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    // --- fetch lifecycle -------------------------------------------------

    /// Fetch the current window from the source. Returns false when the
    /// fetch was skipped (already loading) or its response went stale.
    pub async fn refresh(&mut self) -> Result<bool> {
        if self.state.is_loading() {
            tracing::debug!("fetch already in flight; skipping");
            return Ok(false);
        }
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        self.state.set_loading(true);
        let query = self.fetch_query();
        let outcome = self.source.fetch(&query).await;
        self.state.set_loading(false);
        if seq != self.fetch_seq {
            tracing::debug!("discarding stale fetch response");
            return Ok(false);
        }
        match outcome {
            Ok(result) => {
                self.load_error = None;
                self.state.replace_rows(result, self.options.has_actions());
                Ok(true)
            }
            Err(error) => {
                tracing::warn!(%error, "fetch failed");
                self.load_error = Some(LOAD_ERROR_MESSAGE.to_string());
                Err(error.into())
            }
        }
    }

    fn fetch_query(&self) -> FetchQuery {
        if self.options.server_side {
            FetchQuery::server(&self.state.view, self.options.extra_params.clone())
        } else {
            FetchQuery::client(self.options.extra_params.clone())
        }
    }

    async fn sync(&mut self) -> Result<()> {
        if self.options.server_side {
            self.refresh().await?;
        }
        Ok(())
    }

    // --- view operations -------------------------------------------------

    pub async fn set_page(&mut self, page: usize) -> Result<()> {
        self.state.set_page(page);
        self.sync().await
    }

    pub async fn next_page(&mut self) -> Result<()> {
        let page = self.state.view.page + 1;
        self.set_page(page).await
    }

    pub async fn prev_page(&mut self) -> Result<()> {
        let page = self.state.view.page.saturating_sub(1);
        self.set_page(page).await
    }

    pub async fn set_page_size(&mut self, page_size: PageSize) -> Result<()> {
        self.state.set_page_size(page_size);
        self.sync().await
    }

    /// Sort by a column; unknown or unsortable fields are ignored.
    pub async fn sort_by(&mut self, field: &str) -> Result<()> {
        let sortable = self
            .state
            .columns()
            .get(field)
            .is_some_and(|column| column.sortable && !column.is_actions());
        if !sortable {
            tracing::debug!(field, "ignoring sort on unsortable column");
            return Ok(());
        }
        self.state.set_sort(field);
        self.sync().await
    }

    /// Apply a search input. Every input waits out the debounce window, so
    /// bursts of keystrokes collapse into the last one; a superseded input
    /// returns false without touching state.
    pub async fn search(&mut self, text: &str) -> Result<bool> {
        if !self.options.enable_search {
            return Err(ComponentError::Disabled("search"));
        }
        if !self.debouncer.settle().await {
            tracing::debug!("search input superseded");
            return Ok(false);
        }
        self.state.set_search(text);
        self.sync().await?;
        Ok(true)
    }

    /// Handle on the search debouncer, for hosts that feed keystrokes from
    /// their own tasks.
    pub fn search_debouncer(&self) -> Debouncer {
        self.debouncer.clone()
    }

    pub fn toggle_selection(&mut self, id: RowId) {
        self.state.toggle_selection(id);
    }

    /// Select or deselect every row on the visible page.
    pub fn select_all_visible(&mut self, selected: bool) {
        let ids = self.state.page_ids();
        self.state.set_all_selection(&ids, selected);
    }

    pub fn set_column_visible(&mut self, field: &str, visible: bool) -> bool {
        if !self.options.enable_columns_dropdown {
            return false;
        }
        self.state.set_column_visible(field, visible)
    }

    pub fn toggle_all_columns(&mut self, visible: bool) {
        let fields: Vec<String> = self
            .state
            .columns()
            .toggleable()
            .map(|column| column.field.clone())
            .collect();
        for field in fields {
            self.state.set_column_visible(&field, visible);
        }
    }

    pub fn toggle_view_mode(&mut self) -> Result<()> {
        if !self.options.enable_view_toggle {
            return Err(ComponentError::Disabled("view toggle"));
        }
        self.state.toggle_view_mode();
        Ok(())
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.set_view_mode(mode);
    }

    // --- edit flow -------------------------------------------------------

    /// Open the edit dialog for a row: from the cache when present, else
    /// fetched from the edit route. Opening replaces any open session.
    pub async fn open_edit(&mut self, id: RowId) -> Result<()> {
        if !self.options.editable {
            return Err(ComponentError::Disabled("editing"));
        }
        let session = match self.state.find_row(id) {
            Some(row) => EditSession::from_row(row, self.state.columns()),
            None => {
                let row = self.crud.fetch_record(id).await?;
                EditSession::from_row(&row, self.state.columns())
            }
        };
        self.edit_session = Some(session);
        Ok(())
    }

    /// Save the open edit session. Validation failures and other request
    /// errors keep the session open; success closes it and refreshes.
    pub async fn save_edit(&mut self) -> Result<SaveOutcome> {
        let Some(session) = &self.edit_session else {
            return Err(ComponentError::NoEditSession);
        };
        match self.crud.update(session.row_id, &session.draft).await {
            Ok(()) => {
                self.edit_session = None;
                self.notifier.success("Record updated");
                self.refresh().await?;
                Ok(SaveOutcome::Saved)
            }
            Err(CrudError::Validation(errors)) => {
                if let Some(session) = &mut self.edit_session {
                    session.apply_errors(errors);
                }
                Ok(SaveOutcome::Rejected)
            }
            Err(error) => {
                let message = error.to_string();
                if let Some(session) = &mut self.edit_session {
                    session.apply_errors(ValidationErrors::general(message.clone()));
                }
                self.notifier.error(&message);
                Ok(SaveOutcome::Rejected)
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_session = None;
    }

    // --- delete flows ----------------------------------------------------

    /// Stage a single-row delete pending confirmation.
    pub fn request_delete(&mut self, id: RowId) -> Result<()> {
        if !self.options.enable_delete {
            return Err(ComponentError::Disabled("delete"));
        }
        self.pending_delete = Some(id);
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Execute the staged delete. Failure leaves rows and selection
    /// untouched.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        let Some(id) = self.pending_delete.take() else {
            return Err(ComponentError::NoPendingDelete);
        };
        match self.crud.delete(id).await {
            Ok(()) => {
                if self.options.server_side {
                    self.state.view.selection.remove(&id);
                    self.refresh().await?;
                } else {
                    self.state.remove_row(id);
                }
                self.notifier.success("Record deleted");
                Ok(())
            }
            Err(error) => {
                self.notifier.error(&error.to_string());
                Err(error.into())
            }
        }
    }

    /// Bulk delete the current selection, including ids no longer in the
    /// visible window. The host confirms before any request is sent;
    /// declining returns false and leaves everything intact. The selection
    /// is cleared only on success.
    pub async fn delete_selected(&mut self) -> Result<bool> {
        if !self.options.enable_delete {
            return Err(ComponentError::Disabled("delete"));
        }
        let ids: Vec<RowId> = self.state.selection().iter().copied().collect();
        if ids.is_empty() {
            return Err(ComponentError::EmptySelection);
        }
        let message = format!("Delete {} selected records?", ids.len());
        if !self.host.confirm(&message) {
            tracing::debug!(count = ids.len(), "bulk delete declined");
            return Ok(false);
        }
        match self.crud.delete_many(&ids).await {
            Ok(()) => {
                self.state.clear_selection();
                if self.options.server_side {
                    self.refresh().await?;
                } else {
                    for id in ids {
                        self.state.remove_row(id);
                    }
                }
                self.notifier.success("Records deleted");
                Ok(true)
            }
            Err(error) => {
                self.notifier.error(&error.to_string());
                Err(error.into())
            }
        }
    }

    // --- custom actions --------------------------------------------------

    /// Dispatch an action button press. Returns false when the action was
    /// declined at the confirmation prompt.
    pub async fn run_action(&mut self, def: &ActionDef, id: RowId) -> Result<bool> {
        match &def.behavior {
            ActionBehavior::Edit => {
                self.open_edit(id).await?;
                Ok(true)
            }
            ActionBehavior::Delete => {
                self.request_delete(id)?;
                Ok(true)
            }
            ActionBehavior::Modal(modal_id) => {
                self.host.open_modal(modal_id, id);
                Ok(true)
            }
            ActionBehavior::Direct => {
                if def.is_destructive() {
                    let message = format!("{}?", def.label);
                    if !self.host.confirm(&message) {
                        return Ok(false);
                    }
                }
                match self.crud.run_action(def, id).await {
                    Ok(()) => {
                        self.refresh().await?;
                        Ok(true)
                    }
                    Err(error) => {
                        self.notifier.error(&error.to_string());
                        Err(error.into())
                    }
                }
            }
        }
    }

    // --- export ----------------------------------------------------------

    /// Export the current view into `dir` under the default dated name.
    pub fn export(&mut self, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
        if !self.options.enable_export_dropdown {
            return Err(ComponentError::Disabled("export"));
        }
        match export_to_dir(&self.state, &self.options.instance, format, dir) {
            Ok(path) => Ok(path),
            Err(error) => {
                self.notifier.error(&error.to_string());
                Err(error.into())
            }
        }
    }

    // --- rendering -------------------------------------------------------

    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            editable: self.options.editable,
            delete_enabled: self.options.enable_delete
                && self.options.endpoints.delete_route.is_some(),
            custom_actions: self.options.custom_actions.clone(),
            show_pagination: self.options.show_pagination,
        }
    }

    pub fn render(&self) -> GridView {
        let config = self.render_config();
        match &self.load_error {
            Some(message) => render_load_error(&self.state, &config, message),
            None => render(&self.state, &config),
        }
    }

    pub fn render_text(&self) -> String {
        write_grid(&self.render())
    }
}
