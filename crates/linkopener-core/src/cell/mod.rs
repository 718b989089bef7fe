//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`column_name_to_index`] / [`column_index_to_name`] - Bijective base-26 column numbering

mod address;

pub use address::{column_index_to_name, column_name_to_index, CellAddress};
