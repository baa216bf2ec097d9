//! # Repository Traits
//!
//! Port definitions for catalog persistence.
//!
//! Implementations can use different backends: PostgreSQL for deployments,
//! in-memory storage for tests and local development.
//!
//! # Examples
//!
//! ```ignore
//! use travel_catalog::infrastructure::persistence::traits::{CatalogRepository, ItemQuery};
//! use travel_catalog::domain::value_objects::Category;
//!
//! async fn newest_hotels(repo: &impl CatalogRepository) {
//!     let hotels = repo.list(Category::Hotel, &ItemQuery::active_by_recency()).await.unwrap();
//!     println!("Found {} active hotels", hotels.len());
//! }
//! ```

use crate::domain::entities::catalog_item::CatalogItem;
use crate::domain::value_objects::{Category, ItemId, SortOrder};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the store could not be reached at all.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Filter and ordering for listing one collection.
///
/// The default query returns every item in natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ItemQuery {
    /// Keep only items whose `isFeatured` equals this value.
    pub featured: Option<bool>,
    /// Keep only items whose `isActive` equals this value.
    pub active: Option<bool>,
    /// Result ordering.
    #[serde(default)]
    pub sort: SortOrder,
    /// Maximum number of items to return.
    pub limit: Option<usize>,
}

impl ItemQuery {
    /// Every item, natural order.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Featured and active items, natural order.
    #[must_use]
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            active: Some(true),
            ..Self::default()
        }
    }

    /// Active items, most recent first.
    #[must_use]
    pub fn active_by_recency() -> Self {
        Self {
            active: Some(true),
            sort: SortOrder::Recent,
            ..Self::default()
        }
    }

    /// Caps the number of returned items.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns true if the item passes the filters of this query.
    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.featured.is_none_or(|f| item.is_featured() == f)
            && self.active.is_none_or(|a| item.is_active() == a)
    }
}

/// Repository for catalog items.
///
/// Items are grouped by [`Category`]; ids are unique within a category.
#[async_trait]
pub trait CatalogRepository: Send + Sync + fmt::Debug {
    /// Saves an item, replacing an existing item with the same id.
    ///
    /// A replaced item keeps its position in natural order.
    async fn save(&self, category: Category, item: &CatalogItem) -> RepositoryResult<()>;

    /// Gets an item by id.
    ///
    /// Returns `None` if the item does not exist.
    async fn get(&self, category: Category, id: &ItemId) -> RepositoryResult<Option<CatalogItem>>;

    /// Lists the items of a collection matching the query.
    async fn list(&self, category: Category, query: &ItemQuery)
    -> RepositoryResult<Vec<CatalogItem>>;

    /// Deletes an item.
    ///
    /// Returns true if the item existed.
    async fn delete(&self, category: Category, id: &ItemId) -> RepositoryResult<bool>;

    /// Counts the items of a collection.
    async fn count(&self, category: Category) -> RepositoryResult<u64>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> RepositoryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::catalog_item::CatalogItemBuilder;
    use crate::domain::value_objects::Timestamp;

    #[test]
    fn repository_error_not_found() {
        let err = RepositoryError::not_found("CatalogItem", "t-1");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("t-1"));
    }

    #[test]
    fn repository_error_connection() {
        let err = RepositoryError::connection("refused");
        assert!(err.is_connection());
        assert!(!err.is_not_found());
    }

    #[test]
    fn default_query_matches_everything() {
        let item = CatalogItemBuilder::new(Timestamp::now()).active(false).build();
        assert!(ItemQuery::all().matches(&item));
    }

    #[test]
    fn featured_query_requires_both_flags() {
        let q = ItemQuery::featured();
        let featured_inactive = CatalogItemBuilder::new(Timestamp::now())
            .featured(true)
            .active(false)
            .build();
        let featured_active = CatalogItemBuilder::new(Timestamp::now())
            .featured(true)
            .build();
        assert!(!q.matches(&featured_inactive));
        assert!(q.matches(&featured_active));
    }

    #[test]
    fn active_by_recency_sorts_recent() {
        let q = ItemQuery::active_by_recency().with_limit(1);
        assert_eq!(q.sort, SortOrder::Recent);
        assert_eq!(q.limit, Some(1));
        assert_eq!(q.featured, None);
    }
}
