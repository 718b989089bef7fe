//! Cell address type and column name conversion

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Convert column letters to a 1-based column index (A = 1, Z = 26, AA = 27, etc.)
///
/// Column names are bijective base-26 numerals: every letter is a digit from
/// 1 to 26 and there is no zero digit. Upper- and lowercase letters are
/// equivalent.
///
/// # Examples
/// ```
/// use linkopener_core::column_name_to_index;
///
/// assert_eq!(column_name_to_index("A").unwrap(), 1);
/// assert_eq!(column_name_to_index("ab").unwrap(), 28);
/// assert!(column_name_to_index("A1").is_err());
/// ```
pub fn column_name_to_index(name: &str) -> Result<u32> {
    if name.is_empty() {
        return Err(Error::InvalidColumnName(name.to_string()));
    }

    let mut index: u32 = 0;
    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumnName(name.to_string()));
        }
        let digit = c.to_ascii_lowercase() as u32 - 'a' as u32 + 1;
        index = index
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidColumnName(name.to_string()))?;
    }

    Ok(index)
}

/// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// Index 0 has no column name and yields an empty string.
pub fn column_index_to_name(index: u32) -> String {
    let mut letters = Vec::new();
    let mut n = index;

    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// A cell address (e.g., "A1", "L20")
///
/// Row and column are stored 0-based; the A1 notation is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ...)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address from 0-based indices
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use linkopener_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B3").unwrap();
    /// assert_eq!(addr.row, 2);
    /// assert_eq!(addr.col, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(s.to_string()));
        }

        let col = column_name_to_index(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(s.to_string()))?;

        // Excel rows are 1-based, we use 0-based internally
        if row == 0 {
            return Err(Error::InvalidAddress(s.to_string()));
        }

        let (row, col) = (row - 1, col - 1);

        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }

        Ok(Self { row, col })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!(
            "{}{}",
            column_index_to_name(self.col.saturating_add(1)),
            u64::from(self.row) + 1
        )
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
