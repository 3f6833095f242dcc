//! Column definitions and the column-set invariants.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::row::Row;

/// Field name of the synthetic actions column.
pub const ACTIONS_FIELD: &str = "actions";
/// Field name of the mandatory id column.
pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique key into a row.
    pub field: String,
    /// Display label.
    pub title: String,
    pub sortable: bool,
    pub visible: bool,
    pub editable: bool,
}

impl Column {
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        let field = field.into();
        let editable = field != ID_FIELD;
        Self {
            field,
            title: title.into(),
            sortable: true,
            visible: true,
            editable,
        }
    }

    #[must_use]
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    fn actions() -> Self {
        Self {
            field: ACTIONS_FIELD.to_string(),
            title: "Actions".to_string(),
            sortable: false,
            visible: true,
            editable: false,
        }
    }

    pub fn is_actions(&self) -> bool {
        self.field == ACTIONS_FIELD
    }
}

/// Ordered set of columns.
///
/// Invariants: field names are unique, and at most one actions column
/// exists, always last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    /// Build from an explicit schema, validating the invariants.
    pub fn from_schema(columns: Vec<Column>) -> Result<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.field.clone()) {
                return Err(ModelError::DuplicateColumn(column.field.clone()));
            }
        }
        let mut set = Self { columns };
        set.move_actions_last();
        Ok(set)
    }

    /// Auto-schema fallback: derive columns from the key set of the first
    /// fetched row.
    pub fn infer_from_row(row: &Row) -> Self {
        let columns = row
            .fields()
            .map(|field| Column::new(field, title_from_field(field)))
            .collect();
        Self { columns }
    }

    /// Append the synthetic actions column unless one is already present.
    pub fn ensure_actions(&mut self) {
        if !self.has_actions() {
            self.columns.push(Column::actions());
        }
    }

    pub fn has_actions(&self) -> bool {
        self.columns.iter().any(Column::is_actions)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn get(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.field == field)
    }

    /// Visible columns, actions included.
    pub fn visible(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.visible)
    }

    /// Visible data columns (actions excluded).
    pub fn visible_data(&self) -> impl Iterator<Item = &Column> {
        self.visible().filter(|column| !column.is_actions())
    }

    /// Editable data columns: everything except actions, id, and columns
    /// marked non-editable.
    pub fn editable_data(&self) -> impl Iterator<Item = &Column> {
        self.columns
            .iter()
            .filter(|column| !column.is_actions() && column.field != ID_FIELD && column.editable)
    }

    /// Columns offered in the visibility dropdown (actions and id are
    /// always shown and cannot be toggled).
    pub fn toggleable(&self) -> impl Iterator<Item = &Column> {
        self.columns
            .iter()
            .filter(|column| !column.is_actions() && column.field != ID_FIELD)
    }

    /// Set a column's visibility. The actions and id columns stay visible;
    /// toggling them is ignored. Returns true when anything changed.
    pub fn set_visible(&mut self, field: &str, visible: bool) -> bool {
        if field == ACTIONS_FIELD || field == ID_FIELD {
            return false;
        }
        match self.columns.iter_mut().find(|column| column.field == field) {
            Some(column) if column.visible != visible => {
                column.visible = visible;
                true
            }
            _ => false,
        }
    }

    /// True when every toggleable column is visible.
    pub fn all_visible(&self) -> bool {
        self.toggleable().all(|column| column.visible)
    }

    fn move_actions_last(&mut self) {
        if let Some(index) = self.columns.iter().position(Column::is_actions)
            && index != self.columns.len() - 1
        {
            let actions = self.columns.remove(index);
            self.columns.push(actions);
        }
    }
}

/// Display title derived from a field name: underscores become spaces and
/// each word is capitalized ("first_name" -> "First Name").
pub fn title_from_field(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
