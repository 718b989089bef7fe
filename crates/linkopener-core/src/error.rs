//! Error types for linkopener-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in linkopener-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Range expression does not match `<letters><digits>:<letters><digits>`
    #[error("The given cell range '{0}' is not valid")]
    InvalidRangeExpression(String),

    /// Column letters are empty, contain a non-letter, or are too wide
    #[error("Invalid column name: '{0}'")]
    InvalidColumnName(String),

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row index (0-based) beyond the worksheet limit
    #[error("Row {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index (0-based) beyond the worksheet limit
    #[error("Column {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// Requested cell lies outside the populated area of a sheet (0-based)
    #[error("Cell at row {row}, column {col} is outside the sheet")]
    CellOutOfBounds { row: u32, col: u32 },

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),
}

impl Error {
    /// Whether a run can skip past this error and keep going.
    ///
    /// Only per-cell lookups are recoverable; everything else means there is
    /// nothing valid to iterate.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::CellOutOfBounds { .. })
    }
}
