//! # Category Reader Trait
//!
//! Port through which the featured resolver reads a collection.
//!
//! Two implementations exist and are chosen by the composition root:
//!
//! - [`DirectCategoryReader`](super::direct::DirectCategoryReader) queries the
//!   catalog store, for server-side callers with store access;
//! - [`RemoteCategoryReader`](super::remote::RemoteCategoryReader) calls the
//!   service's own category endpoints over HTTP.
//!
//! Each method maps to one tier of the featured policy, so a store can push
//! the filtering and ordering down into its query.

use crate::domain::entities::catalog_item::CatalogItem;
use crate::domain::value_objects::Category;
use crate::infrastructure::readers::error::ReaderResult;
use async_trait::async_trait;
use std::fmt;

/// Read-only access to the six catalog collections.
#[async_trait]
pub trait CategoryReader: Send + Sync + fmt::Debug {
    /// Returns a short name for logs (`direct`, `remote`).
    fn mode(&self) -> &'static str;

    /// Featured items that are not inactive, in natural order.
    async fn list_featured(&self, category: Category) -> ReaderResult<Vec<CatalogItem>>;

    /// Items that are not inactive, most recently created first.
    async fn list_active_by_recency(&self, category: Category) -> ReaderResult<Vec<CatalogItem>>;

    /// Every item, in natural order.
    async fn list_any(&self, category: Category) -> ReaderResult<Vec<CatalogItem>>;

    /// Checks that the backing store or host is reachable at all.
    ///
    /// The default implementation assumes it is.
    async fn ensure_available(&self) -> ReaderResult<()> {
        Ok(())
    }
}
