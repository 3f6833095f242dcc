//! Rows: one data record with a unique id plus arbitrary named fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cell::CellValue;

/// Unique row identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RowId(pub i64);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(id: RowId) -> Self {
        let mut cells = BTreeMap::new();
        // Text, not Number: ids past 2^53 do not survive an f64 round trip.
        cells.insert("id".to_string(), CellValue::Text(id.to_string()));
        Self { id, cells }
    }

    /// Build a row from a raw JSON object. Returns `None` when the object
    /// carries no usable `id`; such records are excluded from render,
    /// selection and export.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(map) = value else {
            tracing::warn!("dropping non-object row record");
            return None;
        };
        let Some(id) = map.get("id").and_then(parse_row_id) else {
            tracing::warn!("dropping row record without a usable 'id' field");
            return None;
        };
        let cells = map
            .into_iter()
            .map(|(field, raw)| (field, CellValue::from(raw)))
            .collect();
        Some(Self { id, cells })
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.cells.get(field)
    }

    /// Display text for a field; missing fields render as the empty string.
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(CellValue::as_text).unwrap_or_default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: CellValue) {
        self.cells.insert(field.into(), value);
    }

    /// Field names in this row, in stable (sorted) order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

fn parse_row_id(value: &Value) -> Option<RowId> {
    match value {
        Value::Number(number) => number.as_i64().map(RowId),
        Value::String(text) => text.trim().parse::<i64>().ok().map(RowId),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::Row;
    use serde_json::json;

    #[test]
    fn from_value_accepts_numeric_and_string_ids() {
        let row = Row::from_value(json!({"id": 3, "name": "a"})).unwrap();
        assert_eq!(row.id.0, 3);
        let row = Row::from_value(json!({"id": "12", "name": "b"})).unwrap();
        assert_eq!(row.id.0, 12);
    }

    #[test]
    fn id_cell_keeps_large_ids_exact() {
        let row = Row::new(super::RowId(9_007_199_254_740_993));
        assert_eq!(row.text("id"), "9007199254740993");
    }

    #[test]
    fn from_value_drops_rows_without_id() {
        assert!(Row::from_value(json!({"name": "a"})).is_none());
        assert!(Row::from_value(json!({"id": "x1"})).is_none());
        assert!(Row::from_value(json!("scalar")).is_none());
    }
}
