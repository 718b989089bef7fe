//! The run loop: resolve the file, read it, open every link in the range

use linkopener_core::{hyperlink, NormalizedRange, Workbook};
use linkopener_xlsx::XlsxReader;

use crate::error::AppError;
use crate::fetch::ResourceFetcher;
use crate::opener::LinkOpener;
use crate::source::SpreadsheetSource;

/// Sheet whose cells are scanned
pub const SHEET_INDEX: usize = 0;

/// Counters reported at the end of a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Cells inside the range that exist in the sheet
    pub cells_read: u64,
    /// Cells inside the range past the end of the sheet or of their row
    pub cells_skipped: u64,
    pub links_found: u64,
    pub links_opened: u64,
    pub open_failures: u64,
}

/// Open the links stored in `range` of one worksheet
///
/// Cells are visited row by row, left to right. A failure to open a single
/// link is logged and counted; the loop carries on with the next one.
pub fn open_links_in_range(
    workbook: &Workbook,
    sheet_index: usize,
    range: &NormalizedRange,
    opener: &dyn LinkOpener,
) -> Result<RunSummary, AppError> {
    let sheet = workbook.sheet(sheet_index)?;
    log::info!(
        "Workbook has {} sheet(s), reading '{}' with {} row(s)",
        workbook.sheet_count(),
        sheet.name(),
        sheet.row_count()
    );
    log::debug!(
        "Rows {}..={} and columns {}..={} (zero-based)",
        range.rows().start(),
        range.rows().end(),
        range.columns().start(),
        range.columns().end()
    );

    let mut summary = RunSummary::default();
    let last_row = *range.rows().end();
    let last_col = *range.columns().end();
    let cols = u64::from(range.col_count());

    for row in range.rows() {
        if sheet.row(row).is_none() {
            log::info!("There is no row {} in the sheet, stopping", row + 1);
            summary.cells_skipped += u64::from(last_row - row + 1) * cols;
            break;
        }

        for col in range.columns() {
            let text = match sheet.cell_text(row, col) {
                Ok(text) => text,
                Err(e) if e.is_recoverable() => {
                    log::debug!("{}, skipping rest of row {}", e, row + 1);
                    summary.cells_skipped += u64::from(last_col - col + 1);
                    break;
                }
                Err(e) => return Err(e.into()),
            };
            summary.cells_read += 1;

            let Some(text) = text else { continue };
            for link in hyperlink::find_links(text) {
                summary.links_found += 1;
                match opener.open(link) {
                    Ok(()) => summary.links_opened += 1,
                    Err(e) => {
                        log::warn!("{}", e);
                        summary.open_failures += 1;
                    }
                }
            }
        }
    }

    Ok(summary)
}

/// Run the whole tool once
///
/// The range is checked before anything is downloaded. A downloaded
/// spreadsheet is removed again before this returns.
pub fn run(
    filename: &str,
    cellrange: &str,
    fetcher: &dyn ResourceFetcher,
    opener: &dyn LinkOpener,
) -> Result<RunSummary, AppError> {
    let range = NormalizedRange::parse(cellrange)?;
    log::info!("Opening links in {}", range);

    let source = SpreadsheetSource::resolve(filename, fetcher)?;
    let workbook =
        XlsxReader::read_file(source.path()).map_err(|source_err| AppError::SpreadsheetOpen {
            path: source.path().to_path_buf(),
            source: source_err,
        })?;
    log::debug!("Read workbook from {}", source.origin());

    open_links_in_range(&workbook, SHEET_INDEX, &range, opener)
}
