//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PairingError`] via `#[from]` / `From` impls.

/// Error returned by every backend interaction of the pairing page.
///
/// The page itself has no recovery policy for any of these: callers log the
/// failure and leave the affected region in its pre-fetch state.
#[derive(Debug, thiserror::Error)]
pub enum PairingError {
    /// The request did not produce a response (connection refused, reset, …).
    #[error("backend request failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The backend answered with a non-success status code.
    #[error("backend answered with HTTP {0}")]
    Status(u16),

    /// The `/devices` payload could not be decoded.
    #[error("invalid device directory")]
    Directory(#[from] DirectoryError),
}

/// Errors raised while decoding a device directory payload.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Not JSON, or JSON of an unsupported shape.
    #[error("malformed device directory payload")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed() -> DirectoryError {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        DirectoryError::Malformed(err)
    }

    #[test]
    fn should_display_status_error_with_code() {
        let err = PairingError::Status(503);
        assert_eq!(err.to_string(), "backend answered with HTTP 503");
    }

    #[test]
    fn should_display_transport_error() {
        let err = PairingError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "backend request failed");
    }

    #[test]
    fn should_keep_transport_source() {
        use std::error::Error as _;

        let err = PairingError::Transport("connection refused".into());
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("connection refused"));
    }

    #[test]
    fn should_convert_directory_error_into_pairing_error() {
        let err: PairingError = malformed().into();
        assert!(matches!(err, PairingError::Directory(_)));
        assert_eq!(err.to_string(), "invalid device directory");
    }

    #[test]
    fn should_display_malformed_directory_error() {
        assert_eq!(malformed().to_string(), "malformed device directory payload");
    }
}
