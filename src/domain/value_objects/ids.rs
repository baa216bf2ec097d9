//! # Identity Types
//!
//! Identifiers for catalog entities.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Longest id accepted from request input.
const MAX_ID_LEN: usize = 128;

/// Opaque identifier of a catalog item.
///
/// Assigned by the store on creation. Stores differ in their id format
/// (document-store object ids, UUIDs, integers), so the value is kept as an
/// opaque string. On input a JSON string, an integer or an extended-JSON
/// `{"$oid": "..."}` object is accepted; output is always a string.
///
/// # Examples
///
/// ```
/// use travel_catalog::domain::value_objects::ItemId;
///
/// let id = ItemId::new("65a1f0c2e4b0a1b2c3d4e5f6");
/// assert_eq!(id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Wire forms of an id.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawItemId::deserialize(deserializer)? {
            RawItemId::Text(id) | RawItemId::ObjectId { oid: id } => Self(id),
            RawItemId::Signed(n) => Self(n.to_string()),
            RawItemId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

impl ItemId {
    /// Creates an item id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses an id from request input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidItemId`] if the input is blank, longer
    /// than 128 bytes, or contains control characters.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty()
            || trimmed.len() > MAX_ID_LEN
            || trimmed.chars().any(char::is_control)
        {
            return Err(DomainError::InvalidItemId(input.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Generates a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ItemId::generate(), ItemId::generate());
    }

    #[test]
    fn parse_trims_and_rejects_blank() {
        assert_eq!(ItemId::parse(" h-1 ").unwrap().as_str(), "h-1");
        assert!(matches!(ItemId::parse("   "), Err(DomainError::InvalidItemId(_))));
        assert!(ItemId::parse(&"x".repeat(129)).is_err());
        assert!(ItemId::parse("a\u{0}b").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ItemId::new("abc");
        assert_eq!(serde_json::to_string(&id).ok().as_deref(), Some("\"abc\""));
    }

    #[test]
    fn deserializes_numbers_and_object_ids_as_strings() {
        let cases = [
            (serde_json::json!("h-1"), "h-1"),
            (serde_json::json!(2), "2"),
            (serde_json::json!(-7), "-7"),
            (serde_json::json!(u64::MAX), "18446744073709551615"),
            (serde_json::json!({ "$oid": "65a1f0c2e4b0a1b2c3d4e5f6" }), "65a1f0c2e4b0a1b2c3d4e5f6"),
        ];
        for (raw, want) in cases {
            let id: ItemId = serde_json::from_value(raw).unwrap();
            assert_eq!(id.as_str(), want);
        }

        assert!(serde_json::from_value::<ItemId>(serde_json::json!(1.5)).is_err());
        assert!(serde_json::from_value::<ItemId>(serde_json::json!(null)).is_err());
    }
}
