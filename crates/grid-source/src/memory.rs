//! In-memory data source.

use async_trait::async_trait;
use grid_core::{SortDirection, natural_cmp, sort_rows};
use grid_model::{FetchResult, Row};

use crate::error::Result;
use crate::query::FetchQuery;
use crate::{DataSource, UNBOUNDED};

/// Serves a fixed row set. With no limit in the query it behaves like a
/// client-side endpoint (returns everything); with a limit it applies
/// search, sort and slicing the way a conforming server endpoint would,
/// which makes it a reference implementation for server-side tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<Row>,
}

impl MemorySource {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn fetch(&self, query: &FetchQuery) -> Result<FetchResult> {
        let Some(limit) = query.limit else {
            return Ok(FetchResult::from_rows(self.rows.clone()));
        };

        let needle = query
            .search
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let mut matched: Vec<&Row> = self
            .rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || row
                        .cells
                        .values()
                        .any(|cell| cell.as_text().to_lowercase().contains(&needle))
            })
            .collect();

        if let Some(field) = &query.sort {
            let direction = query.order.unwrap_or(SortDirection::Asc);
            sort_rows(&mut matched, field, direction);
        } else {
            matched.sort_by(|a, b| natural_cmp(&a.id.to_string(), &b.id.to_string()));
        }

        let total = matched.len() as u64;
        let offset = query.offset.unwrap_or(0) as usize;
        let window: Vec<Row> = if limit == UNBOUNDED {
            matched.into_iter().cloned().collect()
        } else {
            matched
                .into_iter()
                .skip(offset)
                .take(limit.max(0) as usize)
                .cloned()
                .collect()
        };
        Ok(FetchResult {
            rows: window,
            total,
        })
    }
}
