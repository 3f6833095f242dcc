pub mod error;
pub mod http;
pub mod memory;
pub mod query;

pub use error::SourceError;
pub use http::HttpSource;
pub use memory::MemorySource;
pub use query::{FetchQuery, UNBOUNDED};

use async_trait::async_trait;
use grid_model::FetchResult;

/// Abstraction over row retrieval.
///
/// Client-side mode calls `fetch` once at startup and computes all views
/// locally; server-side mode re-fetches on every view-affecting change.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, query: &FetchQuery) -> Result<FetchResult, SourceError>;
}

#[async_trait]
impl DataSource for Box<dyn DataSource> {
    async fn fetch(&self, query: &FetchQuery) -> Result<FetchResult, SourceError> {
        (**self).fetch(query).await
    }
}
