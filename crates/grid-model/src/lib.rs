pub mod action;
pub mod cell;
pub mod column;
pub mod error;
pub mod payload;
pub mod row;

pub use action::{ActionBehavior, ActionDef};
pub use cell::CellValue;
pub use column::{ACTIONS_FIELD, Column, ColumnSet, ID_FIELD};
pub use error::{ModelError, Result};
pub use payload::{FetchResult, decode_payload};
pub use row::{Row, RowId};

#[cfg(test)]
mod tests {
    use super::{CellValue, Column, ColumnSet, Row, RowId};

    #[test]
    fn column_set_rejects_duplicate_fields() {
        let result = ColumnSet::from_schema(vec![
            Column::new("name", "Name"),
            Column::new("name", "Name Again"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn row_cells_round_trip() {
        let mut row = Row::new(RowId(7));
        row.set("name", CellValue::Text("widget".into()));
        assert_eq!(row.get("name").unwrap().as_text(), "widget");
        assert_eq!(row.get("missing"), None);
    }
}
