//! Error types for the folio crate.
//!
//! This module defines the centralized error type [`FolioError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for folio operations.
///
/// The GitHub widget is the only user-visible failure path; its three variants
/// (`Network`, `Http`, `Decode`) are caught at the page boundary and turned into
/// an error panel. The remaining variants cover configuration and the preference
/// store.
///
/// # Examples
///
/// ```
/// use folio::FolioError;
///
/// let err = FolioError::Http { status: 403, url: "https://api.github.com/users/octocat".into() };
/// assert_eq!(err.to_string(), "HTTP 403 from https://api.github.com/users/octocat");
/// ```
#[derive(Debug, Error)]
pub enum FolioError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Status code returned by the server.
        status: u16,
        /// URL that was requested.
        url: String,
    },

    /// The response body was not the JSON shape we expected.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Reading or writing the preference store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Palette parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl FolioError {
    /// Returns `true` for the failures that belong to the GitHub fetch sequence.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { .. } | Self::Decode(_))
    }
}

/// A specialized `Result` type for folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failures_are_classified() {
        assert!(FolioError::Network("reset".into()).is_fetch_failure());
        assert!(FolioError::Http { status: 500, url: String::new() }.is_fetch_failure());
        assert!(FolioError::Decode("eof".into()).is_fetch_failure());
        assert!(!FolioError::Storage("locked".into()).is_fetch_failure());
        assert!(!FolioError::Config("bad".into()).is_fetch_failure());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FolioError = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
