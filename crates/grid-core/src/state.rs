//! Renderer-independent view state.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use grid_model::RowId;

/// Rows per page. `All` collapses the result set onto one implicit page and
/// disables pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Limited(usize),
    All,
}

impl PageSize {
    pub fn numeric(self) -> Option<usize> {
        match self {
            PageSize::Limited(size) => Some(size),
            PageSize::All => None,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Limited(10)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Limited(size) => size.fmt(f),
            PageSize::All => f.write_str("All"),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        match value.parse::<usize>() {
            Ok(size) if size > 0 => Ok(PageSize::Limited(size)),
            _ => Err(format!("invalid page size: {value}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Table,
    Card,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Card,
            ViewMode::Card => ViewMode::Table,
        }
    }
}

/// The mutable state driving what is currently shown.
///
/// `selection` may reference ids outside the current page: selections
/// persist across pagination, sorting and search within one session.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Current page, 1-based.
    pub page: usize,
    pub page_size: PageSize,
    pub sort: Option<Sort>,
    pub search: String,
    pub selection: BTreeSet<RowId>,
    pub view_mode: ViewMode,
}

impl ViewState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: 1,
            page_size,
            sort: None,
            search: String::new(),
            selection: BTreeSet::new(),
            view_mode: ViewMode::default(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
