//! Workbook export as SpreadsheetML 2003 XML, one "Data" worksheet.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;
use crate::table::ExportTable;

const SPREADSHEET_NS: &str = "urn:schemas-microsoft-com:office:spreadsheet";
const SHEET_NAME: &str = "Data";

pub fn write_workbook<W: Write>(table: &ExportTable, writer: W) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("Workbook");
    root.push_attribute(("xmlns", SPREADSHEET_NS));
    root.push_attribute(("xmlns:ss", SPREADSHEET_NS));
    xml.write_event(Event::Start(root))?;

    let mut sheet = BytesStart::new("Worksheet");
    sheet.push_attribute(("ss:Name", SHEET_NAME));
    xml.write_event(Event::Start(sheet))?;
    xml.write_event(Event::Start(BytesStart::new("Table")))?;

    write_row(&mut xml, &table.headers)?;
    for row in &table.rows {
        write_row(&mut xml, row)?;
    }

    xml.write_event(Event::End(BytesEnd::new("Table")))?;
    xml.write_event(Event::End(BytesEnd::new("Worksheet")))?;
    xml.write_event(Event::End(BytesEnd::new("Workbook")))?;
    Ok(())
}

fn write_row<W: Write>(xml: &mut Writer<W>, values: &[String]) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("Row")))?;
    for value in values {
        xml.write_event(Event::Start(BytesStart::new("Cell")))?;
        let mut data = BytesStart::new("Data");
        data.push_attribute(("ss:Type", cell_type(value)));
        xml.write_event(Event::Start(data))?;
        xml.write_event(Event::Text(BytesText::new(value)))?;
        xml.write_event(Event::End(BytesEnd::new("Data")))?;
        xml.write_event(Event::End(BytesEnd::new("Cell")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("Row")))?;
    Ok(())
}

fn cell_type(value: &str) -> &'static str {
    if !value.is_empty() && value.parse::<f64>().is_ok() {
        "Number"
    } else {
        "String"
    }
}

#[cfg(test)]
mod tests {
    use super::write_workbook;
    use crate::table::ExportTable;

    #[test]
    fn worksheet_is_named_data_and_cells_are_typed() {
        let table = ExportTable {
            headers: vec!["Id".to_string(), "Name".to_string()],
            rows: vec![vec!["3".to_string(), "a & b".to_string()]],
        };
        let mut out = Vec::new();
        write_workbook(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("<Worksheet ss:Name=\"Data\">"));
        assert!(text.contains("<Data ss:Type=\"Number\">3</Data>"));
        assert!(text.contains("<Data ss:Type=\"String\">a &amp; b</Data>"));
    }
}
