//! End-to-end tests for linkopener-xlsx.
//!
//! Each test builds the exact workbook it needs with [`common::XlsxFixture`],
//! writes it to a temp file, then reads it back with `XlsxReader::read_file`
//! and asserts on the cell text.

mod common;
mod reading;

// Re-export common utilities for submodules
pub use common::*;
