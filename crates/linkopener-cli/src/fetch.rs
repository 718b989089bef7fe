//! Downloading remote spreadsheets

use std::io::Write;
use std::time::Duration;

use thiserror::Error;

const USER_AGENT: &str = concat!("linkopener/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from a single download
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, redirect or body transfer failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server answered HTTP {0}")]
    Status(u16),

    /// Writing the body to its destination failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can copy a remote resource into a local sink
pub trait ResourceFetcher {
    /// Write the body found at `url` into `sink`, returning the byte count
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError>;
}

/// [`ResourceFetcher`] over plain HTTP(S) GET requests
pub struct HttpFetcher {
    http: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }
}

impl ResourceFetcher for HttpFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        let mut response = self.http.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.copy_to(&mut *sink)?;
        sink.flush()?;
        Ok(bytes)
    }
}
