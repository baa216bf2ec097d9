//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)          - Invalid category names, malformed items
//! ├── Repository(RepositoryError)  - Catalog store failures
//! ├── Reader(ReaderError)          - Category reader failures
//! ├── Validation(String)           - Input validation failures
//! ├── NotFound                     - Resource not found
//! ├── Configuration(String)        - Invalid or missing settings
//! └── Internal(String)             - Anything else
//! ```
//!
//! # Examples
//!
//! ```
//! use travel_catalog::application::error::ApplicationError;
//!
//! let err = ApplicationError::not_found("hotel", "h-123");
//! assert!(err.is_not_found());
//!
//! let err = ApplicationError::validation("limit must be positive");
//! assert!(err.is_validation());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use crate::infrastructure::readers::error::ReaderError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from business rules.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Catalog store error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Category reader error.
    #[error("reader error: {0}")]
    Reader(#[from] ReaderError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Repository(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(_))
    }

    /// Returns true if a backing service could not be reached.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Repository(e) => e.is_connection(),
            Self::Reader(e) => e.is_unreachable(),
            _ => false,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found() {
        let err = ApplicationError::not_found("tour", "t-1");
        assert!(err.to_string().contains("tour"));
        assert!(err.to_string().contains("t-1"));
        assert!(err.is_not_found());
    }

    #[test]
    fn repository_not_found_is_not_found() {
        let err: ApplicationError = RepositoryError::not_found("CatalogItem", "x").into();
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn domain_errors_are_validation() {
        let err: ApplicationError = DomainError::InvalidCategory("boats".to_string()).into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("boats"));
    }

    #[test]
    fn unavailable_from_connection_failures() {
        let err: ApplicationError = RepositoryError::connection("refused").into();
        assert!(err.is_unavailable());

        let err: ApplicationError = ReaderError::connection("refused").into();
        assert!(err.is_unavailable());

        let err: ApplicationError = ReaderError::http_status(500, "boom").into();
        assert!(!err.is_unavailable());
    }

    #[test]
    fn configuration() {
        let err = ApplicationError::configuration("server.port must be non-zero");
        assert!(err.to_string().contains("configuration"));
        assert!(!err.is_not_found());
    }
}
