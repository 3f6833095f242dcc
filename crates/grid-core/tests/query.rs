//! Pipeline tests: search, natural sort, pagination.

use grid_core::state::{PageSize, Sort, SortDirection, ViewState};
use grid_core::{filter_rows, run_query};
use grid_model::{CellValue, Column, ColumnSet, Row, RowId};

fn row(id: i64, name: &str, note: &str) -> Row {
    let mut row = Row::new(RowId(id));
    row.set("name", CellValue::from(name));
    row.set("note", CellValue::from(note));
    row
}

fn columns() -> ColumnSet {
    ColumnSet::from_schema(vec![
        Column::new("id", "Id"),
        Column::new("name", "Name"),
        Column::new("note", "Note"),
    ])
    .unwrap()
}

fn names(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|row| row.text("name")).collect()
}

#[test]
fn natural_sort_orders_mixed_names() {
    let rows = vec![row(1, "B2", ""), row(2, "B10", ""), row(3, "A1", "")];
    let mut state = ViewState::new(PageSize::All);
    state.sort = Some(Sort {
        field: "name".to_string(),
        direction: SortDirection::Asc,
    });
    let output = run_query(&rows, &columns(), &state);
    assert_eq!(names(&output.rows), ["A1", "B2", "B10"]);

    state.sort.as_mut().unwrap().direction = SortDirection::Desc;
    let output = run_query(&rows, &columns(), &state);
    assert_eq!(names(&output.rows), ["B10", "B2", "A1"]);
}

#[test]
fn empty_search_keeps_insertion_order() {
    let rows = vec![row(3, "c", ""), row(1, "a", ""), row(2, "b", "")];
    let matched = filter_rows(&rows, &columns(), "");
    assert_eq!(names(&matched), ["c", "a", "b"]);
}

#[test]
fn search_is_case_insensitive_substring_over_visible_columns() {
    let rows = vec![
        row(1, "Widget", "red"),
        row(2, "Gadget", "WIDGETY"),
        row(3, "Sprocket", "blue"),
    ];
    let matched = filter_rows(&rows, &columns(), "widget");
    assert_eq!(matched.len(), 2);
}

#[test]
fn hidden_columns_do_not_match_search() {
    let rows = vec![row(1, "a", "secret"), row(2, "secret", "b")];
    let mut cols = columns();
    cols.set_visible("note", false);
    let matched = filter_rows(&rows, &cols, "secret");
    assert_eq!(names(&matched), ["secret"]);
}

#[test]
fn missing_sort_values_sort_first_ascending() {
    let mut bare = Row::new(RowId(9));
    bare.set("note", CellValue::from("n"));
    let rows = vec![row(1, "b", ""), bare, row(2, "a", "")];
    let mut state = ViewState::new(PageSize::All);
    state.sort = Some(Sort {
        field: "name".to_string(),
        direction: SortDirection::Asc,
    });
    let output = run_query(&rows, &columns(), &state);
    assert_eq!(names(&output.rows), ["", "a", "b"]);
}

#[test]
fn pagination_slices_and_clamps() {
    let rows: Vec<Row> = (1..=5).map(|n| row(n, &format!("r{n}"), "")).collect();
    let mut state = ViewState::new(PageSize::Limited(2));

    state.page = 3;
    let output = run_query(&rows, &columns(), &state);
    assert_eq!(output.total, 5);
    assert_eq!(output.total_pages, 3);
    assert_eq!(output.rows.len(), 1);

    // Requesting a page past the end clamps to the last page.
    state.page = 4;
    let output = run_query(&rows, &columns(), &state);
    assert_eq!(output.page, 3);
    assert_eq!(output.rows.len(), 1);
}

#[test]
fn total_counts_matches_not_cache_size() {
    let rows = vec![row(1, "x", ""), row(2, "x", ""), row(3, "y", "")];
    let mut state = ViewState::new(PageSize::Limited(10));
    state.search = "x".to_string();
    let output = run_query(&rows, &columns(), &state);
    assert_eq!(output.total, 2);
}
