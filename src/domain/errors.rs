//! # Domain Errors
//!
//! Error types for catalog domain rules.

use crate::domain::value_objects::ParseEnumError;
use thiserror::Error;

/// Error type for domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Unknown collection name.
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    /// Item id is empty or malformed.
    #[error("invalid item id: {0}")]
    InvalidItemId(String),

    /// Payload could not be decoded as a catalog item.
    #[error("invalid catalog item: {0}")]
    InvalidItem(String),
}

impl From<ParseEnumError> for DomainError {
    fn from(err: ParseEnumError) -> Self {
        match err {
            ParseEnumError::InvalidValue(_, value) => Self::InvalidCategory(value),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Category;

    #[test]
    fn parse_error_converts_to_invalid_category() {
        let err: DomainError = "spaceships"
            .parse::<Category>()
            .map_err(DomainError::from)
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidCategory("spaceships".to_string()));
        assert!(err.to_string().contains("spaceships"));
    }
}
