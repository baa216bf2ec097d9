//! # Reader Errors
//!
//! Error types for category reads.
//!
//! A reader error never reaches an API caller of the featured endpoint: the
//! resolver degrades the affected category to `null`. The variants still
//! matter for logging and for the category list endpoints.
//!
//! # Examples
//!
//! ```
//! use travel_catalog::infrastructure::readers::error::ReaderError;
//!
//! let error = ReaderError::timeout("request timed out after 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = ReaderError::http_status(404, "not found");
//! assert!(!error.is_retryable());
//! ```

use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Error type for category reader operations.
#[derive(Debug, Clone, Error)]
pub enum ReaderError {
    /// Request timed out.
    #[error("reader timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("reader connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Upstream answered with a non-success HTTP status.
    #[error("reader http error ({status}): {message}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// Response could not be decoded.
    #[error("reader protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// The catalog store failed.
    #[error("reader store error: {message}")]
    Store {
        /// Error message.
        message: String,
        /// True if the store could not be reached at all.
        unreachable: bool,
    },

    /// Internal reader error.
    #[error("reader internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl ReaderError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient.
    ///
    /// Nothing retries reads today; the flag only drives log levels.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::Store { unreachable, .. } => *unreachable,
            Self::Protocol { .. } | Self::Internal { .. } => false,
        }
    }

    /// Returns true if the backing store or upstream host is unreachable.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::Store { unreachable: true, .. }
        )
    }

    /// Returns the HTTP status, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<RepositoryError> for ReaderError {
    fn from(err: RepositoryError) -> Self {
        Self::Store {
            unreachable: err.is_connection(),
            message: err.to_string(),
        }
    }
}

/// Result type for reader operations.
pub type ReaderResult<T> = Result<T, ReaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        let error = ReaderError::timeout("test");
        assert!(error.is_retryable());
        assert!(!error.is_unreachable());
    }

    #[test]
    fn server_errors_are_retryable() {
        assert!(ReaderError::http_status(503, "down").is_retryable());
        assert!(ReaderError::http_status(429, "slow down").is_retryable());
        assert!(!ReaderError::http_status(404, "missing").is_retryable());
        assert_eq!(ReaderError::http_status(404, "missing").status(), Some(404));
    }

    #[test]
    fn repository_connection_error_is_unreachable() {
        let error: ReaderError = RepositoryError::connection("refused").into();
        assert!(error.is_unreachable());
        assert!(error.is_retryable());

        let error: ReaderError = RepositoryError::query("syntax").into();
        assert!(!error.is_unreachable());
    }

    #[test]
    fn display_format() {
        let error = ReaderError::protocol("expected a list");
        let display = error.to_string();
        assert!(display.contains("protocol"));
        assert!(display.contains("expected a list"));
    }
}
