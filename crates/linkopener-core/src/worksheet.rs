//! Worksheet type

use crate::cell::CellAddress;
use crate::error::{Error, Result};

/// A worksheet (single sheet in a workbook)
///
/// Cells are stored as text, row by row. Rows may be shorter than their
/// neighbours and may be empty; a cell that exists but holds nothing is
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell text, indexed by 0-based row then column
    rows: Vec<Vec<Option<String>>>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows, including empty ones before the last populated row
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a row's cells (0-based row index)
    pub fn row(&self, row: u32) -> Option<&[Option<String>]> {
        self.rows.get(row as usize).map(Vec::as_slice)
    }

    /// Append a row after the last one
    pub fn push_row(&mut self, cells: Vec<Option<String>>) {
        self.rows.push(cells);
    }

    /// Set a cell's text, growing the grid as needed
    pub fn set_cell<S: Into<String>>(&mut self, row: u32, col: u32, text: S) {
        let (row, col) = (row as usize, col as usize);
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, None);
        }
        cells[col] = Some(text.into());
    }

    /// Get a cell's text by 0-based indices
    ///
    /// Returns [`Error::CellOutOfBounds`] when the row does not exist or is
    /// shorter than `col`, and `Ok(None)` for an existing cell with no value.
    pub fn cell_text(&self, row: u32, col: u32) -> Result<Option<&str>> {
        self.rows
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .map(Option::as_deref)
            .ok_or(Error::CellOutOfBounds { row, col })
    }

    /// Get a cell's text by address
    pub fn cell_text_at(&self, addr: CellAddress) -> Result<Option<&str>> {
        self.cell_text(addr.row, addr.col)
    }

    /// Check if the worksheet holds no cell values at all
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(Option::is_none)
    }
}
