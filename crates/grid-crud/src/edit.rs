//! The in-flight edit dialog state.

use std::collections::BTreeMap;

use grid_model::{ColumnSet, Row, RowId};

use crate::validation::ValidationErrors;

/// One open edit dialog: the draft field values and whatever validation
/// errors the last save attempt produced. The session stays open until the
/// save succeeds or the user cancels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub row_id: RowId,
    pub draft: BTreeMap<String, String>,
    pub errors: ValidationErrors,
}

impl EditSession {
    /// Seed the draft from a row, restricted to the editable data columns.
    pub fn from_row(row: &Row, columns: &ColumnSet) -> Self {
        let draft = columns
            .editable_data()
            .map(|column| (column.field.clone(), row.text(&column.field)))
            .collect();
        Self {
            row_id: row.id,
            draft,
            errors: ValidationErrors::default(),
        }
    }

    /// Update one draft field, clearing its stale validation messages.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        self.draft.insert(field.to_string(), value.into());
        self.errors.fields.remove(field);
    }

    pub fn apply_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::EditSession;
    use crate::validation::ValidationErrors;
    use grid_model::{CellValue, Column, ColumnSet, Row, RowId};
    use serde_json::json;

    #[test]
    fn draft_covers_editable_columns_only() {
        let columns = ColumnSet::from_schema(vec![
            Column::new("id", "Id"),
            Column::new("name", "Name"),
            Column::new("locked", "Locked").editable(false),
        ])
        .unwrap();
        let mut row = Row::new(RowId(4));
        row.set("name", CellValue::from("x"));
        row.set("locked", CellValue::from("y"));
        let session = EditSession::from_row(&row, &columns);
        assert_eq!(session.row_id, RowId(4));
        assert_eq!(session.draft.get("name").map(String::as_str), Some("x"));
        assert!(!session.draft.contains_key("id"));
        assert!(!session.draft.contains_key("locked"));
    }

    #[test]
    fn editing_a_field_clears_its_errors() {
        let columns = ColumnSet::from_schema(vec![Column::new("name", "Name")]).unwrap();
        let row = Row::new(RowId(1));
        let mut session = EditSession::from_row(&row, &columns);
        session.apply_errors(ValidationErrors::from_body(
            &json!({"errors": {"name": ["is required"]}}),
        ));
        assert!(session.has_errors());
        session.set_field("name", "fixed");
        assert!(!session.has_errors());
    }
}
