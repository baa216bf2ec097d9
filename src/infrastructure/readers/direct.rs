//! # Direct Category Reader
//!
//! Reads collections straight from a [`CatalogRepository`].

use crate::domain::entities::catalog_item::CatalogItem;
use crate::domain::value_objects::Category;
use crate::infrastructure::persistence::traits::{CatalogRepository, ItemQuery};
use crate::infrastructure::readers::error::ReaderResult;
use crate::infrastructure::readers::traits::CategoryReader;
use async_trait::async_trait;
use std::sync::Arc;

/// [`CategoryReader`] backed by the catalog store.
///
/// The store handle is created once at startup and shared.
#[derive(Debug, Clone)]
pub struct DirectCategoryReader {
    repository: Arc<dyn CatalogRepository>,
}

impl DirectCategoryReader {
    /// Creates a reader over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryReader for DirectCategoryReader {
    fn mode(&self) -> &'static str {
        "direct"
    }

    async fn list_featured(&self, category: Category) -> ReaderResult<Vec<CatalogItem>> {
        Ok(self.repository.list(category, &ItemQuery::featured()).await?)
    }

    async fn list_active_by_recency(&self, category: Category) -> ReaderResult<Vec<CatalogItem>> {
        Ok(self
            .repository
            .list(category, &ItemQuery::active_by_recency())
            .await?)
    }

    async fn list_any(&self, category: Category) -> ReaderResult<Vec<CatalogItem>> {
        Ok(self.repository.list(category, &ItemQuery::all()).await?)
    }

    async fn ensure_available(&self) -> ReaderResult<()> {
        Ok(self.repository.ping().await?)
    }
}
