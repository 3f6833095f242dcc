//! The renderer-independent view tree.
//!
//! Rendering is a pure function from state to these types; binding them to
//! an actual surface (terminal, GUI, markup) is an adapter concern.

use grid_core::{SelectAll, ViewMode};
use grid_model::{ActionDef, RowId};

use crate::pagination::PaginationView;

/// Sort affordance on a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMarker {
    /// Column is not sortable; no indicator.
    Unsortable,
    /// Sortable but not the current sort key.
    Sortable,
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub field: String,
    pub title: String,
    pub sort: SortMarker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    pub select_all: SelectAll,
    pub cells: Vec<HeaderCell>,
    /// Whether a trailing "Actions" header is present.
    pub actions: bool,
}

/// One rendered (escaped) cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCell {
    pub field: String,
    pub text: String,
}

/// One action button bound to a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub row_id: RowId,
    pub def: ActionDef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RowId,
    pub selected: bool,
    pub cells: Vec<BodyCell>,
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RowView>),
    /// No matching rows; the message spans all visible columns.
    Empty { message: String, colspan: usize },
    /// Load failure; previous cache stays in place behind this banner.
    Error { message: String, colspan: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub header: HeaderRow,
    pub body: TableBody,
    pub pagination: Option<PaginationView>,
    pub page_info: String,
}

/// Card-mode rendering of the same row window: label/value pairs plus the
/// same action set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub id: RowId,
    pub selected: bool,
    pub fields: Vec<(String, String)>,
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    Cards(Vec<CardItem>),
    Empty { message: String },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub body: CardBody,
    pub pagination: Option<PaginationView>,
    pub page_info: String,
}

/// Both render targets, kept in sync; `mode` says which one is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub mode: ViewMode,
    pub table: TableView,
    pub card: CardView,
}
