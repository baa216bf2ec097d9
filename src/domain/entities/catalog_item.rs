//! # Catalog Item Entity
//!
//! One entry in any of the six catalog collections.
//!
//! The collections share only a handful of fields: identity, the
//! `isActive`/`isFeatured` flags and the creation time. Everything else
//! (title, price, images, location, ...) differs per collection and is kept
//! as an opaque JSON object that is flattened into the item on the wire.
//!
//! # Examples
//!
//! ```
//! use travel_catalog::domain::entities::catalog_item::CatalogItemBuilder;
//! use travel_catalog::domain::value_objects::Timestamp;
//!
//! let item = CatalogItemBuilder::new(Timestamp::now())
//!     .title("Sunset dhow cruise")
//!     .featured(true)
//!     .build();
//!
//! assert!(item.is_featured());
//! assert!(item.is_active());
//! assert!(item.is_featured_candidate());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ItemId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

fn default_active() -> bool {
    true
}

/// Only an explicit `false` hides an item; `null` counts as active.
fn active_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn featured_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Undated items sort as the oldest.
fn created_at_or_epoch<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
    Ok(Option::<Timestamp>::deserialize(deserializer)?.unwrap_or_else(Timestamp::epoch))
}

/// A catalog item as stored and served.
///
/// Serialized in camelCase (`isActive`, `isFeatured`, `createdAt`) with the
/// collection-specific attributes flattened alongside. `_id` is accepted as
/// an alias of `id` on input. Missing or `null` flags take their defaults
/// (active, not featured) and a missing `createdAt` reads as the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(alias = "_id")]
    id: ItemId,
    #[serde(default = "default_active", deserialize_with = "active_flag")]
    is_active: bool,
    #[serde(default, deserialize_with = "featured_flag")]
    is_featured: bool,
    #[serde(default = "Timestamp::epoch", deserialize_with = "created_at_or_epoch")]
    created_at: Timestamp,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl CatalogItem {
    /// Reconstructs an item from stored parts.
    #[must_use]
    pub fn from_parts(
        id: ItemId,
        is_active: bool,
        is_featured: bool,
        created_at: Timestamp,
        attributes: Map<String, Value>,
    ) -> Self {
        Self {
            id,
            is_active,
            is_featured,
            created_at,
            attributes,
        }
    }

    /// Decodes an item from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidItem` if the value is not an object with
    /// an id, or if a present `createdAt` or flag has the wrong type.
    pub fn from_json(value: Value) -> DomainResult<Self> {
        serde_json::from_value(value).map_err(|e| DomainError::InvalidItem(e.to_string()))
    }

    /// Returns the item id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns false if the item is hidden from public resolution.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns true if an administrator marked the item as featured.
    #[inline]
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.is_featured
    }

    /// Returns true if the item may be surfaced as its collection's
    /// featured representative without falling back.
    #[inline]
    #[must_use]
    pub fn is_featured_candidate(&self) -> bool {
        self.is_featured && self.is_active
    }

    /// Returns the creation time.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the collection-specific attributes.
    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Returns the `title` attribute, if it is a string.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.attributes.get("title").and_then(Value::as_str)
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogItem({}", self.id)?;
        if let Some(title) = self.title() {
            write!(f, " \"{}\"", title)?;
        }
        write!(
            f,
            " active={} featured={})",
            self.is_active, self.is_featured
        )
    }
}

/// Builder for [`CatalogItem`].
#[derive(Debug, Clone)]
pub struct CatalogItemBuilder {
    id: Option<ItemId>,
    is_active: bool,
    is_featured: bool,
    created_at: Timestamp,
    attributes: Map<String, Value>,
}

impl CatalogItemBuilder {
    /// Creates a builder for an active, non-featured item.
    #[must_use]
    pub fn new(created_at: Timestamp) -> Self {
        Self {
            id: None,
            is_active: true,
            is_featured: false,
            created_at,
            attributes: Map::new(),
        }
    }

    /// Sets the id. A random id is generated when none is given.
    #[must_use]
    pub fn id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the featured flag.
    #[must_use]
    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Sets the `title` attribute.
    #[must_use]
    pub fn title(self, title: impl Into<String>) -> Self {
        self.attribute("title", Value::String(title.into()))
    }

    /// Sets an arbitrary attribute.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Builds the item.
    #[must_use]
    pub fn build(self) -> CatalogItem {
        CatalogItem {
            id: self.id.unwrap_or_else(ItemId::generate),
            is_active: self.is_active,
            is_featured: self.is_featured,
            created_at: self.created_at,
            attributes: self.attributes,
        }
    }
}
