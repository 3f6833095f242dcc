//! Scalar cell values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One display value inside a row.
///
/// Non-scalar JSON (objects, arrays) is flattened to its JSON text so that
/// search, sort and export always operate on strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Display text for this value. `Missing` renders as the empty string.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Bool(value) => value.to_string(),
            CellValue::Number(value) => format_number(*value),
            CellValue::Text(value) => value.clone(),
            CellValue::Missing => String::new(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Missing,
            Value::Bool(flag) => CellValue::Bool(flag),
            Value::Number(number) => match number.as_f64() {
                Some(parsed) => CellValue::Number(parsed),
                None => CellValue::Text(number.to_string()),
            },
            Value::String(text) => CellValue::Text(text),
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// Render integral floats without the trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::CellValue;
    use serde_json::json;

    #[test]
    fn scalars_convert() {
        assert_eq!(CellValue::from(json!(3)).as_text(), "3");
        assert_eq!(CellValue::from(json!(2.5)).as_text(), "2.5");
        assert_eq!(CellValue::from(json!(true)).as_text(), "true");
        assert_eq!(CellValue::from(json!(null)), CellValue::Missing);
        assert_eq!(CellValue::from(json!("x")).as_text(), "x");
    }

    #[test]
    fn nested_values_flatten_to_json_text() {
        assert_eq!(CellValue::from(json!({"a": 1})).as_text(), "{\"a\":1}");
        assert_eq!(CellValue::from(json!([1, 2])).as_text(), "[1,2]");
    }
}
