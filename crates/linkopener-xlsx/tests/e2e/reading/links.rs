//! Tests for reading link-bearing cells from XLSX files.

use crate::XlsxFixture;
use linkopener_core::NormalizedRange;
use linkopener_xlsx::XlsxReader;
use pretty_assertions::assert_eq;

#[test]
fn test_shared_string_links_in_column() {
    let fixture = XlsxFixture::new()
        .shared_string("Module")
        .shared_string("https://example.com/one")
        .shared_string("https://example.com/two?a=1&b=2")
        .sheet(
            "Modules",
            r#"<row r="1"><c r="L1" t="s"><v>0</v></c></row>
               <row r="2"><c r="L2" t="s"><v>1</v></c></row>
               <row r="3"><c r="L3" t="s"><v>2</v></c></row>"#,
        )
        .write();

    let workbook = XlsxReader::read_file(fixture.path()).expect("Failed to read workbook");
    let sheet = workbook.worksheet(0).expect("No worksheet");
    let range = NormalizedRange::parse("L2:L20").unwrap();

    let texts: Vec<_> = range
        .cells()
        .filter_map(|addr| sheet.cell_text_at(addr).ok().flatten())
        .collect();

    assert_eq!(
        texts,
        vec!["https://example.com/one", "https://example.com/two?a=1&b=2"]
    );
}

#[test]
fn test_inline_string_link() {
    let fixture = XlsxFixture::new()
        .sheet(
            "Sheet1",
            r#"<row r="2"><c r="B2" t="inlineStr"><is><t>http://inline.example/page</t></is></c></row>"#,
        )
        .write();

    let workbook = XlsxReader::read_file(fixture.path()).unwrap();
    let sheet = workbook.worksheet(0).unwrap();

    assert_eq!(sheet.cell_text(1, 1).unwrap(), Some("http://inline.example/page"));
    assert_eq!(sheet.cell_text(1, 0).unwrap(), None);
}

#[test]
fn test_numbers_keep_stored_form() {
    let fixture = XlsxFixture::new()
        .sheet(
            "Sheet1",
            r#"<row r="1"><c r="A1"><v>12</v></c><c r="B1"><v>0.1</v></c></row>"#,
        )
        .write();

    let workbook = XlsxReader::read_file(fixture.path()).unwrap();
    let sheet = workbook.worksheet(0).unwrap();

    assert_eq!(sheet.cell_text(0, 0).unwrap(), Some("12"));
    assert_eq!(sheet.cell_text(0, 1).unwrap(), Some("0.1"));
}
