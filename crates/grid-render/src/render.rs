//! Pure render: state in, view tree out.

use grid_core::TableState;
use grid_model::{ActionBehavior, ActionDef, Column, Row, RowId};

use crate::escape::escape_text;
use crate::pagination::{PaginationView, page_info, pagination_view};
use crate::view::{
    ActionButton, BodyCell, CardBody, CardItem, CardView, GridView, HeaderCell, HeaderRow,
    RowView, SortMarker, TableBody, TableView,
};

/// Feature switches the renderer needs to assemble the action column.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pub editable: bool,
    pub delete_enabled: bool,
    pub custom_actions: Vec<ActionDef>,
    pub show_pagination: bool,
}

impl RenderConfig {
    /// Actions for one row: built-in Edit unless a caller action overrides
    /// it by label, built-in Delete under the same rule, then the remaining
    /// caller actions in order.
    fn row_actions(&self, id: RowId) -> Vec<ActionButton> {
        let mut buttons = Vec::new();
        let overridden = |label: &str| self.custom_actions.iter().any(|def| def.label == label);
        if self.editable && !overridden("Edit") {
            buttons.push(ActionButton {
                row_id: id,
                def: ActionDef::new("Edit").behavior(ActionBehavior::Edit),
            });
        }
        if self.delete_enabled && !overridden("Delete") {
            buttons.push(ActionButton {
                row_id: id,
                def: ActionDef::new("Delete")
                    .method("DELETE")
                    .behavior(ActionBehavior::Delete),
            });
        }
        for def in &self.custom_actions {
            buttons.push(ActionButton {
                row_id: id,
                def: def.clone(),
            });
        }
        buttons
    }
}

/// Render the current view. Both targets (table and card) are produced in
/// sync so toggling the view mode never loses selection.
pub fn render(state: &TableState, config: &RenderConfig) -> GridView {
    render_inner(state, config, None)
}

/// Render with the body replaced by a load-error banner spanning all
/// visible columns; the cached rows stay untouched underneath.
pub fn render_load_error(state: &TableState, config: &RenderConfig, message: &str) -> GridView {
    render_inner(state, config, Some(message))
}

fn render_inner(state: &TableState, config: &RenderConfig, error: Option<&str>) -> GridView {
    let output = state.query();
    let columns = state.columns();
    let colspan = columns.visible().count() + 1;

    let header = HeaderRow {
        select_all: state.select_all_state(),
        cells: columns
            .visible_data()
            .map(|column| header_cell(state, column))
            .collect(),
        actions: columns.visible().any(Column::is_actions),
    };

    let pagination: Option<PaginationView> = pagination_view(
        output.page,
        output.total_pages,
        state.view.page_size,
        config.show_pagination,
    );
    let info = page_info(output.page, state.view.page_size, output.total);

    let (table_body, card_body) = match error {
        Some(message) => (
            TableBody::Error {
                message: message.to_string(),
                colspan,
            },
            CardBody::Error {
                message: message.to_string(),
            },
        ),
        None if output.rows.is_empty() => (
            TableBody::Empty {
                message: "No data available".to_string(),
                colspan,
            },
            CardBody::Empty {
                message: "No data available".to_string(),
            },
        ),
        None => (
            TableBody::Rows(
                output
                    .rows
                    .iter()
                    .map(|row| body_row(state, config, row))
                    .collect(),
            ),
            CardBody::Cards(
                output
                    .rows
                    .iter()
                    .map(|row| card_item(state, config, row))
                    .collect(),
            ),
        ),
    };

    GridView {
        mode: state.view.view_mode,
        table: TableView {
            header,
            body: table_body,
            pagination: pagination.clone(),
            page_info: info.clone(),
        },
        card: CardView {
            body: card_body,
            pagination,
            page_info: info,
        },
    }
}

fn header_cell(state: &TableState, column: &Column) -> HeaderCell {
    let sort = if !column.sortable {
        SortMarker::Unsortable
    } else {
        match &state.view.sort {
            Some(sort) if sort.field == column.field => match sort.direction {
                grid_core::SortDirection::Asc => SortMarker::Asc,
                grid_core::SortDirection::Desc => SortMarker::Desc,
            },
            _ => SortMarker::Sortable,
        }
    };
    HeaderCell {
        field: column.field.clone(),
        title: column.title.clone(),
        sort,
    }
}

fn body_row(state: &TableState, config: &RenderConfig, row: &Row) -> RowView {
    let columns = state.columns();
    RowView {
        id: row.id,
        selected: state.selection().contains(&row.id),
        cells: columns
            .visible_data()
            .map(|column| BodyCell {
                field: column.field.clone(),
                text: escape_text(&row.text(&column.field)),
            })
            .collect(),
        actions: if columns.visible().any(Column::is_actions) {
            config.row_actions(row.id)
        } else {
            Vec::new()
        },
    }
}

fn card_item(state: &TableState, config: &RenderConfig, row: &Row) -> CardItem {
    let columns = state.columns();
    CardItem {
        id: row.id,
        selected: state.selection().contains(&row.id),
        fields: columns
            .visible_data()
            .map(|column| (column.title.clone(), escape_text(&row.text(&column.field))))
            .collect(),
        actions: if columns.visible().any(Column::is_actions) {
            config.row_actions(row.id)
        } else {
            Vec::new()
        },
    }
}
