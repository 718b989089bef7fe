//! # linkopener-xlsx
//!
//! XLSX (Office Open XML) reader for linkopener.
//!
//! Only cell text is read: every sheet becomes a [`linkopener_core::Worksheet`]
//! whose cells hold the text a spreadsheet application would display for
//! strings, and the stored lexical form for numbers.

pub mod error;
pub mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
