//! Handing links to the OS default browser

use crate::error::AppError;

/// Something that can show a link to the user
pub trait LinkOpener {
    /// Open one link; failures are reported, never retried
    fn open(&self, url: &str) -> Result<(), AppError>;
}

/// [`LinkOpener`] that asks the OS to open the link with its default handler
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), AppError> {
        log::info!("Trying to open the following url: {}", url);
        open::that(url).map_err(|source| AppError::LinkOpen {
            url: url.to_string(),
            source,
        })
    }
}
