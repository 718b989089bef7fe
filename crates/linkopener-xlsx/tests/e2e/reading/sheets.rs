//! Tests for sheet order, names and extents.

use crate::XlsxFixture;
use linkopener_core::Error;
use linkopener_xlsx::{XlsxError, XlsxReader};

#[test]
fn test_sheets_keep_workbook_order() {
    let fixture = XlsxFixture::new()
        .sheet(
            "First",
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>one</t></is></c></row>"#,
        )
        .sheet(
            "Second",
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>two</t></is></c></row>"#,
        )
        .write();

    let workbook = XlsxReader::read_file(fixture.path()).unwrap();

    assert_eq!(workbook.sheet_count(), 2);
    let names: Vec<_> = workbook.worksheets().map(|ws| ws.name()).collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(workbook.worksheet(1).unwrap().cell_text(0, 0).unwrap(), Some("two"));
}

#[test]
fn test_extent_is_last_populated_row() {
    let fixture = XlsxFixture::new()
        .sheet(
            "Sheet1",
            r#"<row r="1"><c r="A1"><v>1</v></c></row>
               <row r="5"><c r="C5"><v>5</v></c></row>
               <row r="9"/>"#,
        )
        .write();

    let workbook = XlsxReader::read_file(fixture.path()).unwrap();
    let sheet = workbook.worksheet(0).unwrap();

    assert_eq!(sheet.row_count(), 5);
    assert_eq!(
        sheet.cell_text(0, 1),
        Err(Error::CellOutOfBounds { row: 0, col: 1 })
    );
    assert_eq!(
        sheet.cell_text(2, 0),
        Err(Error::CellOutOfBounds { row: 2, col: 0 })
    );
    assert_eq!(sheet.cell_text(4, 1).unwrap(), None);
    assert_eq!(sheet.cell_text(4, 2).unwrap(), Some("5"));
    assert!(sheet.cell_text(8, 0).is_err());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = XlsxReader::read_file(dir.path().join("nope.xlsx"));
    assert!(matches!(result, Err(XlsxError::Io(_))));
}

#[test]
fn test_invalid_cell_reference() {
    let fixture = XlsxFixture::new()
        .sheet("Sheet1", r#"<row r="1"><c r="1A"><v>1</v></c></row>"#)
        .write();

    let result = XlsxReader::read_file(fixture.path());
    assert!(matches!(result, Err(XlsxError::Parse(_))));
}

#[test]
fn test_unusual_sheet_names_do_not_block_reading() {
    let long_name = "A sheet name longer than thirty-one chars";
    let fixture = XlsxFixture::new()
        .sheet(
            "Links",
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>https://a.example</t></is></c></row>"#,
        )
        .sheet(long_name, "")
        .sheet("LINKS", "")
        .write();

    let workbook = XlsxReader::read_file(fixture.path()).unwrap();

    assert_eq!(workbook.sheet_count(), 3);
    let first = workbook.sheet(0).unwrap();
    assert_eq!(first.name(), "Links");
    assert_eq!(first.cell_text(0, 0).unwrap(), Some("https://a.example"));
    assert_eq!(workbook.sheet(1).unwrap().name(), long_name);
    assert_eq!(workbook.sheet(2).unwrap().name(), "LINKS");
}

#[test]
fn test_row_beyond_sheet_limit() {
    let fixture = XlsxFixture::new()
        .sheet("Sheet1", r#"<row r="4294967295"/><row/>"#)
        .write();

    let result = XlsxReader::read_file(fixture.path());
    assert!(matches!(result, Err(XlsxError::Parse(_))));
}
