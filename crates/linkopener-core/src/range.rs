//! Range expression parsing (e.g., "B2:C10")

use crate::cell::{column_index_to_name, column_name_to_index, CellAddress};
use crate::error::{Error, Result};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Returns the given values in ascending order
pub fn order_ascending<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// The bounds of a rectangular cell range
///
/// All four bounds are 1-based and inclusive, exactly as written in A1
/// notation. `column_start <= column_end` and `row_start <= row_end` always
/// hold, whichever corner the expression named first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedRange {
    pub column_start: u32,
    pub column_end: u32,
    pub row_start: u32,
    pub row_end: u32,
}

impl NormalizedRange {
    /// Build a range from two corners given as 1-based (column, row) pairs, in any order
    fn from_corners(first: (u32, u32), second: (u32, u32)) -> Self {
        let (column_start, column_end) = order_ascending(first.0, second.0);
        let (row_start, row_end) = order_ascending(first.1, second.1);
        Self {
            column_start,
            column_end,
            row_start,
            row_end,
        }
    }

    /// Parse a range from `<letters><digits>:<letters><digits>` notation
    ///
    /// The whole string must match; lowercase letters, `$` markers, sheet
    /// prefixes and surrounding whitespace are all rejected. Row numbers
    /// start at 1.
    ///
    /// # Examples
    /// ```
    /// use linkopener_core::NormalizedRange;
    ///
    /// let range = NormalizedRange::parse("B2:A1").unwrap();
    /// assert_eq!((range.column_start, range.column_end), (1, 2));
    /// assert_eq!((range.row_start, range.row_end), (1, 2));
    ///
    /// assert!(NormalizedRange::parse("A1B2").is_err());
    /// ```
    pub fn parse(expr: &str) -> Result<Self> {
        let invalid = || Error::InvalidRangeExpression(expr.to_string());

        let (_, col1, row1, col2, row2) =
            lazy_regex::regex_captures!(r"^([A-Z]+)([0-9]+):([A-Z]+)([0-9]+)$", expr)
                .ok_or_else(invalid)?;

        let row1: u32 = row1.parse().map_err(|_| invalid())?;
        let row2: u32 = row2.parse().map_err(|_| invalid())?;
        if row1 == 0 || row2 == 0 {
            return Err(invalid());
        }

        Ok(Self::from_corners(
            (column_name_to_index(col1)?, row1),
            (column_name_to_index(col2)?, row2),
        ))
    }

    /// 0-based row indices covered by the range
    pub fn rows(&self) -> RangeInclusive<u32> {
        self.row_start - 1..=self.row_end - 1
    }

    /// 0-based column indices covered by the range
    pub fn columns(&self) -> RangeInclusive<u32> {
        self.column_start - 1..=self.column_end - 1
    }

    /// Top-left cell (0-based address)
    pub fn start(&self) -> CellAddress {
        CellAddress::new(self.row_start - 1, self.column_start - 1)
    }

    /// Bottom-right cell (0-based address)
    pub fn end(&self) -> CellAddress {
        CellAddress::new(self.row_end - 1, self.column_end - 1)
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.row_end - self.row_start + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u32 {
        self.column_end - self.column_start + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        u64::from(self.row_count()) * u64::from(self.col_count())
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellIter {
        CellIter {
            range: *self,
            current: Some(self.start()),
        }
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        format!(
            "{}{}:{}{}",
            column_index_to_name(self.column_start),
            self.row_start,
            column_index_to_name(self.column_end),
            self.row_end
        )
    }
}

impl fmt::Display for NormalizedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for NormalizedRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Row-major iterator over the cells of a [`NormalizedRange`]
pub struct CellIter {
    range: NormalizedRange,
    current: Option<CellAddress>,
}

impl Iterator for CellIter {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        let addr = self.current?;
        let end = self.range.end();

        self.current = if addr.col < end.col {
            Some(CellAddress::new(addr.row, addr.col + 1))
        } else if addr.row < end.row {
            Some(CellAddress::new(addr.row + 1, self.range.start().col))
        } else {
            None
        };

        Some(addr)
    }
}
