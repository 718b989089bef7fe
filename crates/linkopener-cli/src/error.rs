//! Error types for the linkopener binary

use std::path::PathBuf;

use linkopener_xlsx::XlsxError;
use thiserror::Error;

use crate::fetch::FetchError;

/// Errors raised while setting up a run or opening a single link
#[derive(Debug, Error)]
pub enum AppError {
    /// Range expression, column name, or sheet lookup failed
    #[error(transparent)]
    Core(#[from] linkopener_core::Error),

    /// `--filename` does not name anything that can be opened
    #[error("Invalid filename '{name}': {reason}")]
    InvalidFilename { name: String, reason: String },

    /// Remote spreadsheet could not be downloaded
    #[error("Error while downloading {url}: {source}")]
    ResourceFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// Temporary file for a download could not be created
    #[error("Error while creating temp file: {0}")]
    TempFile(#[source] std::io::Error),

    /// Local spreadsheet missing, corrupt, or unreadable
    #[error("Error while opening excel file {}: {source}", path.display())]
    SpreadsheetOpen {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },

    /// The OS could not hand a link to a browser
    #[error("Could not open {url}: {source}")]
    LinkOpen {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
