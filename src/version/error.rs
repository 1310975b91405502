use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Malformed version {version:?}: segment {segment:?} is not numeric")]
    MalformedVersion { version: String, segment: String },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Unparsable page: no version found in {text:?}")]
    UnparsablePage { text: String },

    #[error("Invalid version selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error(transparent)]
    Version(#[from] VersionError),
}
