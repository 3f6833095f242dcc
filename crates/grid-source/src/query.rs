//! Fetch queries and their wire encoding.

use std::collections::BTreeMap;

use grid_core::{PageSize, SortDirection, ViewState};

/// Sentinel limit meaning "all rows, no limit" (mirrors page size `All`).
pub const UNBOUNDED: i64 = -1;

/// Parameters for one data fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchQuery {
    pub limit: Option<i64>,
    pub offset: Option<u64>,
    pub sort: Option<String>,
    pub order: Option<SortDirection>,
    pub search: Option<String>,
    /// Static caller-supplied filters merged into every request.
    pub extra_params: BTreeMap<String, String>,
}

impl FetchQuery {
    /// Client-side query: no view parameters, extra params only.
    pub fn client(extra_params: BTreeMap<String, String>) -> Self {
        Self {
            extra_params,
            ..Self::default()
        }
    }

    /// Server-side query derived from the current view state.
    pub fn server(view: &ViewState, extra_params: BTreeMap<String, String>) -> Self {
        let (limit, offset) = match view.page_size {
            PageSize::Limited(size) => (size as i64, ((view.page - 1) * size) as u64),
            PageSize::All => (UNBOUNDED, 0),
        };
        Self {
            limit: Some(limit),
            offset: Some(offset),
            sort: view.sort.as_ref().map(|sort| sort.field.clone()),
            order: view.sort.as_ref().map(|sort| sort.direction),
            search: Some(view.search.clone()),
            extra_params,
        }
    }

    /// Wire parameters with null/empty values stripped.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(sort) = &self.sort
            && !sort.is_empty()
        {
            params.push(("sort".to_string(), sort.clone()));
        }
        if let Some(order) = self.order {
            params.push(("order".to_string(), order.as_str().to_string()));
        }
        if let Some(search) = &self.search
            && !search.is_empty()
        {
            params.push(("search".to_string(), search.clone()));
        }
        for (key, value) in &self.extra_params {
            if !value.is_empty() {
                params.push((key.clone(), value.clone()));
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::{FetchQuery, UNBOUNDED};
    use grid_core::{PageSize, Sort, SortDirection, ViewState};
    use std::collections::BTreeMap;

    fn extra(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn server_query_encodes_view_state() {
        let mut view = ViewState::new(PageSize::Limited(25));
        view.page = 3;
        view.sort = Some(Sort {
            field: "name".to_string(),
            direction: SortDirection::Desc,
        });
        view.search = "abc".to_string();
        let query = FetchQuery::server(&view, BTreeMap::new());
        assert_eq!(
            query.params(),
            [
                ("limit", "25"),
                ("offset", "50"),
                ("sort", "name"),
                ("order", "desc"),
                ("search", "abc"),
            ]
            .map(|(k, v)| (k.to_string(), v.to_string()))
        );
    }

    #[test]
    fn page_size_all_uses_the_unbounded_sentinel() {
        let view = ViewState::new(PageSize::All);
        let query = FetchQuery::server(&view, BTreeMap::new());
        assert_eq!(query.limit, Some(UNBOUNDED));
        assert_eq!(query.offset, Some(0));
    }

    #[test]
    fn empty_values_are_stripped() {
        let view = ViewState::new(PageSize::Limited(10));
        let query = FetchQuery::server(&view, extra(&[("tenant", "t1"), ("blank", "")]));
        let params = query.params();
        assert!(params.iter().all(|(key, _)| key != "search"));
        assert!(params.iter().all(|(key, _)| key != "sort"));
        assert!(params.iter().all(|(key, _)| key != "blank"));
        assert!(params.contains(&("tenant".to_string(), "t1".to_string())));
    }

    #[test]
    fn client_query_carries_extras_only() {
        let query = FetchQuery::client(extra(&[("scope", "all")]));
        assert_eq!(
            query.params(),
            vec![("scope".to_string(), "all".to_string())]
        );
    }
}
