use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a scrape.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The request could not be sent or the body could not be read
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The marker was not found in any script block
    #[error("marker `{marker}` not found in page")]
    Extraction { marker: String },

    /// Text expected to hold a JSON document does not parse
    #[error("invalid JSON in {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid search URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Coarse failure category reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Extraction,
    Parse,
    Io,
    Usage,
}

impl ScrapeError {
    /// Map the error onto its failure category
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::Network { .. } | ScrapeError::Status { .. } => ErrorKind::Network,
            ScrapeError::Extraction { .. } => ErrorKind::Extraction,
            ScrapeError::Parse { .. } => ErrorKind::Parse,
            ScrapeError::Io { .. } => ErrorKind::Io,
            ScrapeError::InvalidUrl { .. } | ScrapeError::Config(_) => ErrorKind::Usage,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
