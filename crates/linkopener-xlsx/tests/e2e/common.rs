//! Common utilities for E2E tests.

use std::io::Write;

use tempfile::NamedTempFile;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

/// Builder for small XLSX workbooks written to a temp file.
///
/// Sheets are given as `(name, sheetData inner XML)`; shared strings are
/// plain texts referenced by index from `t="s"` cells.
#[derive(Default)]
pub struct XlsxFixture {
    sheets: Vec<(String, String)>,
    shared_strings: Vec<String>,
}

impl XlsxFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(mut self, name: &str, sheet_data: &str) -> Self {
        self.sheets.push((name.to_string(), sheet_data.to_string()));
        self
    }

    pub fn shared_string(mut self, text: &str) -> Self {
        self.shared_strings.push(text.to_string());
        self
    }

    /// Write the workbook and return the temp file holding it
    pub fn write(&self) -> NamedTempFile {
        let file = tempfile::Builder::new()
            .suffix(".xlsx")
            .tempfile()
            .expect("create temp file");

        let mut zip = zip::ZipWriter::new(file.reopen().expect("reopen temp file"));
        let options = zip::write::SimpleFileOptions::default();

        let mut put = |name: &str, body: &str| {
            zip.start_file(name, options).expect("start zip entry");
            zip.write_all(body.as_bytes()).expect("write zip entry");
        };

        put("[Content_Types].xml", CONTENT_TYPES);
        put("_rels/.rels", ROOT_RELS);

        let mut sheets_xml = String::new();
        let mut rels_xml = String::new();
        for (i, (name, sheet_data)) in self.sheets.iter().enumerate() {
            let n = i + 1;
            sheets_xml.push_str(&format!(
                r#"<sheet name="{name}" sheetId="{n}" r:id="rId{n}"/>"#
            ));
            rels_xml.push_str(&format!(
                r#"<Relationship Id="rId{n}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{n}.xml"/>"#
            ));
            put(
                &format!("xl/worksheets/sheet{n}.xml"),
                &format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{sheet_data}</sheetData></worksheet>"#
                ),
            );
        }

        put(
            "xl/workbook.xml",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>{sheets_xml}</sheets></workbook>"#
            ),
        );
        put(
            "xl/_rels/workbook.xml.rels",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels_xml}</Relationships>"#
            ),
        );

        if !self.shared_strings.is_empty() {
            let items: String = self
                .shared_strings
                .iter()
                .map(|s| format!("<si><t>{}</t></si>", escape(s)))
                .collect();
            put(
                "xl/sharedStrings.xml",
                &format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">{items}</sst>"#,
                    self.shared_strings.len()
                ),
            );
        }

        zip.finish().expect("finish zip");
        file
    }
}

/// Escape text for use inside an XML element
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
