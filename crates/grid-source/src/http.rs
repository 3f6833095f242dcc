//! HTTP data source.

use async_trait::async_trait;
use grid_model::{FetchResult, decode_payload};

use crate::error::{Result, SourceError};
use crate::query::FetchQuery;
use crate::DataSource;

/// Fetches rows from `GET <url>?limit&offset&sort&order&search&<extra>`.
///
/// The response body must be a bare row array or `{rows, total}`; in
/// server-side mode only the latter is accepted.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    server_side: bool,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, server_side: bool) -> Self {
        Self {
            url: url.into(),
            server_side,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, query: &FetchQuery) -> Result<FetchResult> {
        let params = query.params();
        tracing::debug!(url = %self.url, params = ?params, "fetching rows");
        let response = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                status: status.as_u16(),
                message,
            });
        }
        let body: serde_json::Value = response.json().await?;
        Ok(decode_payload(body, self.server_side)?)
    }
}
