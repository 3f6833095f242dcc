//! The mutation client: one method per row operation.

use std::collections::BTreeMap;

use grid_model::{ActionDef, Row, RowId};
use serde_json::{Value, json};

use crate::endpoints::Endpoints;
use crate::error::{CrudError, Result};
use crate::route::substitute_id;
use crate::transport::{CrudRequest, CrudResponse, Method, Transport};
use crate::validation::ValidationErrors;

pub struct CrudClient<T: Transport> {
    endpoints: Endpoints,
    transport: T,
}

impl<T: Transport> CrudClient<T> {
    pub fn new(endpoints: Endpoints, transport: T) -> Self {
        Self {
            endpoints,
            transport,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch a single record, used when the row to edit is not in the
    /// local cache.
    pub async fn fetch_record(&self, id: RowId) -> Result<Row> {
        let url = self.endpoints.edit_url(id)?;
        let response = check(self.transport.send(CrudRequest::new(Method::Get, url)).await?)?;
        Row::from_value(response.body).ok_or(CrudError::RowNotFound(id))
    }

    /// Save an edited record with PUT. A 422 response surfaces as
    /// `CrudError::Validation` with the per-field messages.
    pub async fn update(&self, id: RowId, fields: &BTreeMap<String, String>) -> Result<()> {
        let url = self.endpoints.update_url(id)?;
        let body = serde_json::to_value(fields).unwrap_or(Value::Null);
        check(
            self.transport
                .send(CrudRequest::new(Method::Put, url).body(body))
                .await?,
        )?;
        tracing::info!(%id, "record updated");
        Ok(())
    }

    pub async fn delete(&self, id: RowId) -> Result<()> {
        let url = self.endpoints.delete_url(id)?;
        check(
            self.transport
                .send(CrudRequest::new(Method::Delete, url))
                .await?,
        )?;
        tracing::info!(%id, "record deleted");
        Ok(())
    }

    /// Bulk delete: POST `{"ids": [...]}` to the delete-multiple route.
    pub async fn delete_many(&self, ids: &[RowId]) -> Result<()> {
        let url = self.endpoints.delete_multiple_url()?;
        check(
            self.transport
                .send(CrudRequest::new(Method::Post, url).body(json!({ "ids": ids })))
                .await?,
        )?;
        tracing::info!(count = ids.len(), "records deleted");
        Ok(())
    }

    /// Dispatch a caller-defined direct action against one row.
    pub async fn run_action(&self, def: &ActionDef, id: RowId) -> Result<()> {
        let route = def
            .route
            .as_deref()
            .ok_or(CrudError::MissingRoute("action"))?;
        let url = substitute_id(route, id);
        let method = Method::parse(def.method.as_deref());
        check(self.transport.send(CrudRequest::new(method, url)).await?)?;
        tracing::info!(action = %def.label, %id, "action completed");
        Ok(())
    }
}

fn check(response: CrudResponse) -> Result<CrudResponse> {
    if response.is_success() {
        Ok(response)
    } else if response.status == 422 {
        Err(CrudError::Validation(ValidationErrors::from_body(
            &response.body,
        )))
    } else {
        Err(CrudError::Status {
            status: response.status,
            message: response.message(),
        })
    }
}
