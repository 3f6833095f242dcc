//! Mutation endpoint configuration.

use grid_model::RowId;

use crate::error::{CrudError, Result};
use crate::route::substitute_id;

/// Routes the orchestrator may call. All optional; an operation whose route
/// is absent fails with `CrudError::MissingRoute` before any request is
/// sent.
#[derive(Debug, Clone, Default)]
pub struct Endpoints {
    /// GET, fetches a single record when it is not in the local cache.
    pub edit_route: Option<String>,
    /// PUT, saves an edited record.
    pub update_route: Option<String>,
    /// DELETE, removes a single record.
    pub delete_route: Option<String>,
    /// POST, removes a batch of records by id.
    pub delete_multiple_route: Option<String>,
}

impl Endpoints {
    #[must_use]
    pub fn edit_route(mut self, route: impl Into<String>) -> Self {
        self.edit_route = Some(route.into());
        self
    }

    #[must_use]
    pub fn update_route(mut self, route: impl Into<String>) -> Self {
        self.update_route = Some(route.into());
        self
    }

    #[must_use]
    pub fn delete_route(mut self, route: impl Into<String>) -> Self {
        self.delete_route = Some(route.into());
        self
    }

    #[must_use]
    pub fn delete_multiple_route(mut self, route: impl Into<String>) -> Self {
        self.delete_multiple_route = Some(route.into());
        self
    }

    /// True when some route can delete rows, singly or in bulk.
    pub fn can_delete(&self) -> bool {
        self.delete_route.is_some() || self.delete_multiple_route.is_some()
    }

    pub fn edit_url(&self, id: RowId) -> Result<String> {
        resolve(self.edit_route.as_deref(), "edit", id)
    }

    pub fn update_url(&self, id: RowId) -> Result<String> {
        resolve(self.update_route.as_deref(), "update", id)
    }

    pub fn delete_url(&self, id: RowId) -> Result<String> {
        resolve(self.delete_route.as_deref(), "delete", id)
    }

    pub fn delete_multiple_url(&self) -> Result<String> {
        self.delete_multiple_route
            .clone()
            .ok_or(CrudError::MissingRoute("delete_multiple"))
    }
}

fn resolve(route: Option<&str>, operation: &'static str, id: RowId) -> Result<String> {
    route
        .map(|template| substitute_id(template, id))
        .ok_or(CrudError::MissingRoute(operation))
}
