//! HTTP adapter error types.

use btpair_domain::error::{DirectoryError, PairingError};

/// Errors specific to the HTTP backend adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpBackendError {
    /// The configured base URL (or an endpoint joined onto it) is invalid.
    #[error("invalid backend URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not be sent or its body could not be read.
    #[error("HTTP request failed")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The `/devices` body could not be decoded.
    #[error("invalid device directory")]
    Directory(#[from] DirectoryError),
}

impl From<HttpBackendError> for PairingError {
    fn from(err: HttpBackendError) -> Self {
        match err {
            HttpBackendError::Status(code) => Self::Status(code),
            HttpBackendError::Directory(err) => Self::Directory(err),
            other => Self::Transport(Box::new(other)),
        }
    }
}
