//! CSV export, BOM-prefixed so spreadsheet tools pick up UTF-8.

use std::io::Write;

use crate::error::Result;
use crate::table::ExportTable;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn write_csv<W: Write>(table: &ExportTable, mut writer: W) -> Result<()> {
    writer.write_all(UTF8_BOM)?;
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&table.headers)?;
    for row in &table.rows {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}
