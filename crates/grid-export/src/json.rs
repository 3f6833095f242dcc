//! Pretty-printed JSON export: an array of objects keyed by column title.

use std::io::Write;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::table::ExportTable;

pub fn write_json<W: Write>(table: &ExportTable, mut writer: W) -> Result<()> {
    let records: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let object: Map<String, Value> = table
                .headers
                .iter()
                .zip(row)
                .map(|(title, value)| (title.clone(), Value::String(value.clone())))
                .collect();
            Value::Object(object)
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_json;
    use crate::table::ExportTable;

    #[test]
    fn records_are_keyed_by_title_in_column_order() {
        let table = ExportTable {
            headers: vec!["Id".to_string(), "First Name".to_string()],
            rows: vec![vec!["1".to_string(), "Ada".to_string()]],
        };
        let mut out = Vec::new();
        write_json(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let id = text.find("\"Id\"").unwrap();
        let name = text.find("\"First Name\"").unwrap();
        assert!(id < name);
        assert!(text.contains("\"First Name\": \"Ada\""));
    }
}
