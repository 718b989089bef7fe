//! # linkopener-core
//!
//! Core data structures for linkopener.
//!
//! This crate provides the pieces that carry no I/O:
//! - [`NormalizedRange`] - Parsing of `B2:C10` style range expressions into ascending bounds
//! - [`CellAddress`] and the column name helpers - bijective base-26 column numbering
//! - [`Workbook`], [`Worksheet`] - The cell text grid produced by a spreadsheet reader
//! - [`hyperlink`] - Detection of `http(s)://` strings in cell text
//!
//! ## Example
//!
//! ```rust
//! use linkopener_core::NormalizedRange;
//!
//! let range = NormalizedRange::parse("AB12:C3").unwrap();
//! assert_eq!(range.column_start, 3);
//! assert_eq!(range.column_end, 28);
//! assert_eq!(range.row_start, 3);
//! assert_eq!(range.row_end, 12);
//! ```

pub mod cell;
pub mod error;
pub mod hyperlink;
pub mod range;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{column_index_to_name, column_name_to_index, CellAddress};
pub use error::{Error, Result};
pub use range::{order_ascending, NormalizedRange};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
