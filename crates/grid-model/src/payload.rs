//! Fetch payload decoding.

use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::row::Row;

/// Decoded fetch response: rows plus the total matching-row count, which in
/// server-side mode may exceed `rows.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchResult {
    pub rows: Vec<Row>,
    pub total: u64,
}

impl FetchResult {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let total = rows.len() as u64;
        Self { rows, total }
    }
}

/// Decode a JSON body into rows and a total.
///
/// Accepted shapes: a bare array of row objects (total = length), or
/// `{rows: [...], total: N}`. Server-side mode requires the latter. Records
/// without a usable id are dropped with a warning.
pub fn decode_payload(body: Value, server_side: bool) -> Result<FetchResult> {
    match body {
        Value::Array(items) => {
            if server_side {
                return Err(ModelError::MissingTotal);
            }
            Ok(FetchResult::from_rows(decode_rows(items)))
        }
        Value::Object(mut map) => {
            let (Some(rows), Some(total)) = (map.remove("rows"), map.get("total")) else {
                return Err(ModelError::MalformedPayload);
            };
            let Value::Array(items) = rows else {
                return Err(ModelError::MalformedPayload);
            };
            let total = parse_total(total);
            Ok(FetchResult {
                rows: decode_rows(items),
                total,
            })
        }
        _ => Err(ModelError::MalformedPayload),
    }
}

fn decode_rows(items: Vec<Value>) -> Vec<Row> {
    items.into_iter().filter_map(Row::from_value).collect()
}

/// Lenient total parsing: numbers and numeric strings count, anything else
/// is treated as zero.
fn parse_total(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number.as_u64().unwrap_or(0),
        Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
