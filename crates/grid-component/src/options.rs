//! Table configuration.

use std::collections::BTreeMap;
use std::time::Duration;

use grid_core::{PageSize, ViewMode};
use grid_crud::Endpoints;
use grid_model::{ActionDef, Column};

/// Full option set for one table instance. Misconfigured feature flags are
/// downgraded (with a warning) rather than failing construction.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Name used in export file stems.
    pub instance: String,
    /// Explicit column schema; `None` infers columns from the first row.
    pub columns: Option<Vec<Column>>,
    pub endpoints: Endpoints,
    pub server_side: bool,
    pub default_page_size: PageSize,
    pub page_size_options: Vec<PageSize>,
    pub default_view_mode: ViewMode,
    pub show_pagination: bool,
    pub enable_search: bool,
    pub enable_columns_dropdown: bool,
    pub enable_export_dropdown: bool,
    pub enable_view_toggle: bool,
    pub enable_delete: bool,
    pub enable_refresh: bool,
    pub editable: bool,
    pub custom_actions: Vec<ActionDef>,
    /// Extra query parameters appended to every fetch.
    pub extra_params: BTreeMap<String, String>,
    pub search_debounce: Duration,
    /// Accepted for option compatibility; fullscreen is a host concern.
    pub fullscreen: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            instance: "data".to_string(),
            columns: None,
            endpoints: Endpoints::default(),
            server_side: false,
            default_page_size: PageSize::default(),
            page_size_options: vec![
                PageSize::Limited(10),
                PageSize::Limited(25),
                PageSize::Limited(50),
                PageSize::Limited(100),
                PageSize::All,
            ],
            default_view_mode: ViewMode::Table,
            show_pagination: true,
            enable_search: true,
            enable_columns_dropdown: true,
            enable_export_dropdown: true,
            enable_view_toggle: true,
            enable_delete: false,
            enable_refresh: true,
            editable: false,
            custom_actions: Vec::new(),
            extra_params: BTreeMap::new(),
            search_debounce: Duration::from_millis(300),
            fullscreen: false,
        }
    }
}

impl TableOptions {
    /// Downgrade feature flags whose routes are missing. Each downgrade is
    /// logged; the table keeps working without the feature.
    pub fn validated(mut self) -> Self {
        if self.editable && self.endpoints.update_route.is_none() {
            tracing::warn!("editable requested without an update route; disabling editing");
            self.editable = false;
        }
        if self.enable_delete && !self.endpoints.can_delete() {
            tracing::warn!("delete requested without a delete route; disabling delete");
            self.enable_delete = false;
        }
        if self.fullscreen {
            tracing::debug!("fullscreen option ignored");
        }
        self
    }

    /// Whether any row action exists, which decides if the actions column
    /// is appended.
    pub fn has_actions(&self) -> bool {
        self.editable || self.enable_delete || !self.custom_actions.is_empty()
    }
}
