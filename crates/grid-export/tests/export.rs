use chrono::Local;
use grid_core::{PageSize, TableState};
use grid_export::{ExportError, ExportFormat, export_to_dir};
use grid_model::{CellValue, FetchResult, Row, RowId};

fn seeded() -> TableState {
    let mut state = TableState::new(false, PageSize::Limited(10));
    let rows = (1..=3)
        .map(|n| {
            let mut row = Row::new(RowId(n));
            row.set("name", CellValue::from(format!("Item {n}")));
            row.set("price", CellValue::Number(n as f64 * 1.5));
            row
        })
        .collect();
    state.replace_rows(FetchResult::from_rows(rows), true);
    state
}

#[test]
fn csv_export_writes_a_dated_file() {
    let state = seeded();
    let dir = tempfile::tempdir().unwrap();
    let path = export_to_dir(&state, "products", ExportFormat::Csv, dir.path()).unwrap();
    let expected = format!("table-export-products-{}.csv", Local::now().format("%Y-%m-%d"));
    assert_eq!(path.file_name().unwrap().to_str().unwrap(), expected);

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(text.starts_with("Id,Name,Price\n"));
    assert!(text.contains("1,Item 1,1.5"));
}

#[test]
fn workbook_export_contains_the_data_sheet() {
    let state = seeded();
    let dir = tempfile::tempdir().unwrap();
    let path = export_to_dir(&state, "products", ExportFormat::Workbook, dir.path()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(path.extension().is_some_and(|ext| ext == "xls"));
    assert!(text.contains("ss:Name=\"Data\""));
    assert!(text.contains("Item 2"));
}

#[test]
fn empty_view_exports_nothing() {
    let mut state = seeded();
    state.set_search("no match");
    let dir = tempfile::tempdir().unwrap();
    let result = export_to_dir(&state, "products", ExportFormat::Json, dir.path());
    assert!(matches!(result, Err(ExportError::NoData)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
