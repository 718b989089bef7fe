//! Resolving `--filename` into a local spreadsheet file

use std::path::{Path, PathBuf};

use linkopener_core::hyperlink;
use tempfile::NamedTempFile;

use crate::error::AppError;
use crate::fetch::ResourceFetcher;

/// A spreadsheet file on local disk, ready to be read
///
/// A downloaded spreadsheet lives in a temp file that is deleted when the
/// source is dropped.
#[derive(Debug)]
pub enum SpreadsheetSource {
    Local(PathBuf),
    Downloaded { url: String, file: NamedTempFile },
}

impl SpreadsheetSource {
    /// Classify `filename` and, for `http(s)://` URLs, download it
    pub fn resolve(filename: &str, fetcher: &dyn ResourceFetcher) -> Result<Self, AppError> {
        if filename.trim().is_empty() {
            return Err(AppError::InvalidFilename {
                name: filename.to_string(),
                reason: "no file or URL given".into(),
            });
        }

        if hyperlink::is_remote(filename) {
            Self::download(filename, fetcher)
        } else {
            log::info!("Trying to open local file {}", filename);
            Self::local(filename)
        }
    }

    fn download(url: &str, fetcher: &dyn ResourceFetcher) -> Result<Self, AppError> {
        let mut file = tempfile::Builder::new()
            .prefix("linkopener-")
            .suffix(".xlsx")
            .tempfile()
            .map_err(AppError::TempFile)?;

        log::info!("Downloading {} to {}", url, file.path().display());
        let bytes = fetcher
            .fetch(url, file.as_file_mut())
            .map_err(|source| AppError::ResourceFetch {
                url: url.to_string(),
                source,
            })?;
        log::info!("{} bytes downloaded", bytes);

        Ok(Self::Downloaded {
            url: url.to_string(),
            file,
        })
    }

    fn local(filename: &str) -> Result<Self, AppError> {
        let path = Path::new(filename);
        if path.is_absolute() {
            return Ok(Self::Local(path.to_path_buf()));
        }

        let cwd = std::env::current_dir().map_err(|e| AppError::InvalidFilename {
            name: filename.to_string(),
            reason: format!("cannot resolve relative path: {}", e),
        })?;
        Ok(Self::Local(cwd.join(path)))
    }

    /// Path of the file to read
    pub fn path(&self) -> &Path {
        match self {
            Self::Local(path) => path,
            Self::Downloaded { file, .. } => file.path(),
        }
    }

    /// Where the spreadsheet came from, for messages
    pub fn origin(&self) -> String {
        match self {
            Self::Local(path) => path.display().to_string(),
            Self::Downloaded { url, .. } => url.clone(),
        }
    }
}
