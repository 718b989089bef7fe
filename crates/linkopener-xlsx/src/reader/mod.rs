//! XLSX reader

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use linkopener_core::{CellAddress, Workbook, Worksheet, MAX_COLS, MAX_ROWS};

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format to encode special characters in XML:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore (escaped underscore)
fn decode_excel_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '_' {
            result.push(c);
            continue;
        }

        // Check if this looks like _xHHHH_
        let mut hex_chars = String::new();
        let mut consumed_x = false;
        let mut decoded = None;

        if chars.peek() == Some(&'x') {
            chars.next();
            consumed_x = true;

            while hex_chars.len() < 4 {
                match chars.peek() {
                    Some(&ch) if ch.is_ascii_hexdigit() => {
                        hex_chars.push(ch);
                        chars.next();
                    }
                    _ => break,
                }
            }

            if hex_chars.len() == 4 && chars.peek() == Some(&'_') {
                decoded = u32::from_str_radix(&hex_chars, 16)
                    .ok()
                    .and_then(char::from_u32);
                if decoded.is_some() {
                    chars.next(); // consume closing '_'
                }
            }
        }

        match decoded {
            Some(ch) => result.push(ch),
            None => {
                // Not a valid escape sequence, output what we consumed
                result.push('_');
                if consumed_x {
                    result.push('x');
                }
                result.push_str(&hex_chars);
            }
        }
    }

    result
}

/// Get the unescaped value of an attribute by its full name
fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|s| s.to_string()))
}

/// A `<c>` element whose children are still being read
struct PendingCell {
    addr: CellAddress,
    cell_type: Option<String>,
    value: Option<String>,
    inline: Option<String>,
}

/// XLSX file reader
///
/// Produces a [`Workbook`] holding the text of every cell, sheet by sheet in
/// workbook order.
pub struct XlsxReader;

impl XlsxReader {
    /// Read a workbook from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Workbook> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read a workbook from a reader
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Workbook> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an XLSX file
        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let shared_strings = Self::read_shared_strings(&mut archive)?;
        let sheet_info = Self::read_workbook_xml(&mut archive)?;
        let sheet_paths = Self::read_workbook_rels(&mut archive)?;
        log::debug!(
            "Workbook declares {} sheets and {} shared strings",
            sheet_info.len(),
            shared_strings.len()
        );

        let mut workbook = Workbook::empty();

        for (name, r_id) in &sheet_info {
            let Some(path) = sheet_paths.get(r_id) else {
                log::warn!("Sheet '{}' ({}) has no worksheet part, skipping", name, r_id);
                continue;
            };

            let mut worksheet = Worksheet::new(name.as_str());
            Self::read_worksheet(&mut archive, path, &mut worksheet, &shared_strings)?;
            log::debug!(
                "Read sheet '{}' from {} ({} rows)",
                name,
                path,
                worksheet.row_count()
            );
            workbook.push_worksheet(worksheet);
        }

        // Ensure at least one sheet exists
        if workbook.is_empty() {
            workbook.add_worksheet()?;
        }

        Ok(workbook)
    }

    /// Read the shared strings table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(strings), // No shared strings is valid
        };

        let mut xml_reader = Reader::from_reader(BufReader::new(file));

        let mut buf = Vec::new();
        let mut current_string = String::new();
        let mut in_si = false;
        let mut in_t = false;
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current_string.clear();
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if in_si && !in_phonetic => in_t = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.name().as_ref() == b"si" => {
                    strings.push(String::new());
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"si" => {
                        strings.push(decode_excel_escapes(&current_string));
                        in_si = false;
                    }
                    b"rPh" => in_phonetic = false,
                    b"t" => in_t = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_t => {
                    current_string.push_str(&e.unescape()?);
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(strings)
    }

    /// Read workbook.xml to get sheet names and rIds, in tab order
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<(String, String)>> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut sheets = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"sheet" => {
                    let name = attr_value(&e, b"name");
                    // The relationships namespace prefix is usually `r`, but not always
                    let r_id = e
                        .attributes()
                        .flatten()
                        .find(|attr| {
                            attr.key.prefix().is_some() && attr.key.local_name().as_ref() == b"id"
                        })
                        .and_then(|attr| attr.unescape_value().ok().map(|s| s.to_string()));

                    if let (Some(name), Some(r_id)) = (name, r_id) {
                        sheets.push((name, r_id));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Read workbook.xml.rels to get sheet file paths
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let id = attr_value(&e, b"Id");
                    let target = attr_value(&e, b"Target");
                    let rel_type = attr_value(&e, b"Type");

                    // Only include worksheet relationships
                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        if rel_type.ends_with("/worksheet") {
                            // Target is relative to xl/ folder
                            let full_path = match target.strip_prefix('/') {
                                Some(absolute) => absolute.to_string(),
                                None => format!("xl/{}", target),
                            };
                            rels.insert(id, full_path);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Read the cells of a worksheet part into `worksheet`
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: &str,
        worksheet: &mut Worksheet,
        shared_strings: &[String],
    ) -> XlsxResult<()> {
        let file = archive
            .by_name(path)
            .map_err(|_| XlsxError::MissingPart(path.to_string()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));

        let mut buf = Vec::new();

        // Position of the next row / cell when the `r` attribute is omitted
        let mut current_row: u32 = 0;
        let mut next_row: u32 = 0;
        let mut next_col: u32 = 0;

        let mut cell: Option<PendingCell> = None;
        let mut in_value = false;
        let mut in_inline_str = false;
        let mut in_inline_text = false;
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"row" => {
                        current_row = Self::row_position(&e, next_row)?;
                        next_row = Self::advance(current_row)?;
                        next_col = 0;
                    }
                    b"c" => {
                        let addr = Self::cell_position(&e, current_row, next_col)?;
                        next_col = Self::advance(addr.col)?;
                        cell = Some(PendingCell {
                            addr,
                            cell_type: attr_value(&e, b"t"),
                            value: None,
                            inline: None,
                        });
                    }
                    b"v" if cell.is_some() => in_value = true,
                    b"is" if cell.is_some() => in_inline_str = true,
                    b"rPh" => in_phonetic = true,
                    b"t" if in_inline_str && !in_phonetic => in_inline_text = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    // Self-closing <row/> and <c/> hold no values but still take a position
                    b"row" => {
                        current_row = Self::row_position(&e, next_row)?;
                        next_row = Self::advance(current_row)?;
                        next_col = 0;
                    }
                    b"c" => {
                        let addr = Self::cell_position(&e, current_row, next_col)?;
                        next_col = Self::advance(addr.col)?;
                    }
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"c" => {
                        if let Some(pending) = cell.take() {
                            if let Some(text) = Self::cell_text(&pending, shared_strings) {
                                worksheet.set_cell(pending.addr.row, pending.addr.col, text);
                            }
                        }
                    }
                    b"v" => in_value = false,
                    b"is" => in_inline_str = false,
                    b"rPh" => in_phonetic = false,
                    b"t" => in_inline_text = false,
                    // Nothing after sheetData carries cell text
                    b"sheetData" => break,
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    if let Some(pending) = cell.as_mut() {
                        if in_value {
                            pending
                                .value
                                .get_or_insert_with(String::new)
                                .push_str(&e.unescape()?);
                        } else if in_inline_text {
                            pending
                                .inline
                                .get_or_insert_with(String::new)
                                .push_str(&e.unescape()?);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(())
    }

    /// 0-based row index from a `<row r="..">` element, or `fallback` without one
    fn row_position(e: &BytesStart, fallback: u32) -> XlsxResult<u32> {
        let row = match attr_value(e, b"r") {
            Some(r) => r
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .map(|n| n - 1)
                .ok_or_else(|| XlsxError::Parse(format!("Invalid row number '{}'", r)))?,
            None => fallback,
        };

        if row >= MAX_ROWS {
            return Err(XlsxError::Parse(format!(
                "Row {} is beyond the worksheet limit of {} rows",
                u64::from(row) + 1,
                MAX_ROWS
            )));
        }
        Ok(row)
    }

    /// Address of a `<c r="..">` element, or the next free cell in the row without one
    fn cell_position(e: &BytesStart, row: u32, next_col: u32) -> XlsxResult<CellAddress> {
        match attr_value(e, b"r") {
            Some(cell_ref) => CellAddress::parse(&cell_ref).map_err(|err| {
                XlsxError::Parse(format!("Invalid cell reference '{}': {}", cell_ref, err))
            }),
            None if next_col >= MAX_COLS => Err(XlsxError::Parse(format!(
                "Row {} has more than {} cells",
                u64::from(row) + 1,
                MAX_COLS
            ))),
            None => Ok(CellAddress::new(row, next_col)),
        }
    }

    /// Position following `pos`, for rows and cells without an `r` attribute
    fn advance(pos: u32) -> XlsxResult<u32> {
        pos.checked_add(1)
            .ok_or_else(|| XlsxError::Parse(format!("Position {} overflows", pos)))
    }

    /// Display text of a cell, `None` when it holds nothing
    fn cell_text(cell: &PendingCell, shared_strings: &[String]) -> Option<String> {
        let text = match (cell.inline.as_deref(), cell.value.as_deref()) {
            // Inline string - decode Excel escape sequences
            (Some(inline), _) => decode_excel_escapes(inline),
            (None, None) => return None,
            (None, Some(value)) => match cell.cell_type.as_deref() {
                // Shared string
                Some("s") => {
                    let looked_up = value
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .and_then(|idx| shared_strings.get(idx));
                    match looked_up {
                        Some(s) => s.clone(),
                        None => {
                            log::warn!(
                                "Cell {} refers to unknown shared string '{}'",
                                cell.addr,
                                value
                            );
                            return None;
                        }
                    }
                }

                // Boolean
                Some("b") => {
                    let truthy = value == "1" || value.eq_ignore_ascii_case("true");
                    let text = if truthy { "TRUE" } else { "FALSE" };
                    text.to_string()
                }

                // Formula string result
                Some("str") | Some("inlineStr") => decode_excel_escapes(value),

                // Numbers, dates and errors keep their stored form
                _ => value.to_string(),
            },
        };

        (!text.is_empty()).then_some(text)
    }
}
