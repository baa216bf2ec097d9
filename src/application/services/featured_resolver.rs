//! # Featured Resolver
//!
//! Resolves the representative item of one collection through a
//! [`CategoryReader`], tier by tier:
//!
//! 1. first featured, active item;
//! 2. otherwise the most recent active item;
//! 3. otherwise any item.
//!
//! Each tier is one read and later tiers are only queried when earlier ones
//! come back empty. Read failures are contained here: the collection
//! resolves to `None` and the error is logged.

use crate::domain::entities::catalog_item::CatalogItem;
use crate::domain::services::featured_policy::FeaturedTier;
use crate::domain::value_objects::Category;
use crate::infrastructure::readers::error::ReaderResult;
use crate::infrastructure::readers::traits::CategoryReader;
use std::sync::Arc;

/// An item chosen by the resolver and the tier that chose it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The chosen item.
    pub item: CatalogItem,
    /// The tier that produced it.
    pub tier: FeaturedTier,
}

/// Picks one item per collection.
#[derive(Debug, Clone)]
pub struct FeaturedResolver {
    reader: Arc<dyn CategoryReader>,
}

impl FeaturedResolver {
    /// Creates a resolver over the given reader.
    #[must_use]
    pub fn new(reader: Arc<dyn CategoryReader>) -> Self {
        Self { reader }
    }

    /// Returns the reader this resolver queries.
    #[must_use]
    pub fn reader(&self) -> &Arc<dyn CategoryReader> {
        &self.reader
    }

    /// Resolves a collection, propagating read failures.
    ///
    /// # Errors
    ///
    /// Returns the first reader error encountered.
    pub async fn try_resolve(&self, category: Category) -> ReaderResult<Option<Resolution>> {
        if let Some(item) = first(self.reader.list_featured(category).await?) {
            return Ok(Some(Resolution {
                item,
                tier: FeaturedTier::Featured,
            }));
        }

        if let Some(item) = first(self.reader.list_active_by_recency(category).await?) {
            return Ok(Some(Resolution {
                item,
                tier: FeaturedTier::RecentActive,
            }));
        }

        Ok(first(self.reader.list_any(category).await?).map(|item| Resolution {
            item,
            tier: FeaturedTier::AnyItem,
        }))
    }

    /// Resolves a collection, degrading any failure to `None`.
    pub async fn resolve(&self, category: Category) -> Option<CatalogItem> {
        match self.try_resolve(category).await {
            Ok(Some(resolution)) => {
                tracing::debug!(
                    %category,
                    item_id = %resolution.item.id(),
                    tier = %resolution.tier,
                    "featured item resolved"
                );
                Some(resolution.item)
            }
            Ok(None) => {
                tracing::debug!(%category, "collection is empty");
                None
            }
            Err(e) => {
                tracing::warn!(
                    %category,
                    mode = self.reader.mode(),
                    error = %e,
                    "featured lookup failed, returning null"
                );
                None
            }
        }
    }
}

fn first(items: Vec<CatalogItem>) -> Option<CatalogItem> {
    items.into_iter().next()
}
