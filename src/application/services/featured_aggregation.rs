//! # Featured Aggregation Engine
//!
//! Resolves the featured item of all six collections concurrently and
//! assembles them into one [`FeaturedItems`] response.
//!
//! Failures never escape: a collection that fails to resolve is `null`, and
//! when the reader is unreachable altogether every collection is `null`.

use crate::application::services::featured_resolver::FeaturedResolver;
use crate::domain::entities::catalog_item::CatalogItem;
use crate::domain::value_objects::Category;
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;

/// One resolved item (or `null`) per collection.
///
/// Serializes with exactly the six keys `service`, `tour`, `package`,
/// `rental`, `hotel`, `resort`, in that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeaturedItems {
    /// Featured service.
    pub service: Option<CatalogItem>,
    /// Featured tour.
    pub tour: Option<CatalogItem>,
    /// Featured package.
    pub package: Option<CatalogItem>,
    /// Featured rental.
    pub rental: Option<CatalogItem>,
    /// Featured hotel.
    pub hotel: Option<CatalogItem>,
    /// Featured resort.
    pub resort: Option<CatalogItem>,
}

impl FeaturedItems {
    /// A response with every collection `null`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the item resolved for a category.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&CatalogItem> {
        match category {
            Category::Service => self.service.as_ref(),
            Category::Tour => self.tour.as_ref(),
            Category::Package => self.package.as_ref(),
            Category::Rental => self.rental.as_ref(),
            Category::Hotel => self.hotel.as_ref(),
            Category::Resort => self.resort.as_ref(),
        }
    }

    /// Sets the item of a category.
    pub fn set(&mut self, category: Category, item: Option<CatalogItem>) {
        let slot = match category {
            Category::Service => &mut self.service,
            Category::Tour => &mut self.tour,
            Category::Package => &mut self.package,
            Category::Rental => &mut self.rental,
            Category::Hotel => &mut self.hotel,
            Category::Resort => &mut self.resort,
        };
        *slot = item;
    }

    /// Number of collections that resolved to an item.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|c| self.get(**c).is_some())
            .count()
    }
}

/// Engine fanning the featured resolver out over all collections.
#[derive(Debug, Clone)]
pub struct FeaturedAggregationEngine {
    resolver: Arc<FeaturedResolver>,
}

impl FeaturedAggregationEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new(resolver: Arc<FeaturedResolver>) -> Self {
        Self { resolver }
    }

    /// Returns the reader mode (`direct`, `remote`).
    #[must_use]
    pub fn mode(&self) -> &'static str {
        self.resolver.reader().mode()
    }

    /// Returns true if the reader's backing store or host is reachable.
    pub async fn is_available(&self) -> bool {
        self.resolver.reader().ensure_available().await.is_ok()
    }

    /// Collects the featured item of every collection.
    ///
    /// All six lookups run as separate tasks; the result is assembled in
    /// fixed category order once every task has finished.
    pub async fn collect_featured(&self) -> FeaturedItems {
        if let Err(e) = self.resolver.reader().ensure_available().await {
            tracing::warn!(
                mode = self.mode(),
                error = %e,
                "catalog unreachable, returning empty featured set"
            );
            return FeaturedItems::empty();
        }

        let handles = Category::ALL.map(|category| {
            let resolver = Arc::clone(&self.resolver);
            tokio::spawn(async move { resolver.resolve(category).await })
        });

        let mut featured = FeaturedItems::empty();
        for (category, joined) in Category::ALL.into_iter().zip(join_all(handles).await) {
            match joined {
                Ok(item) => featured.set(category, item),
                Err(e) => {
                    tracing::warn!(%category, error = %e, "featured lookup task failed");
                }
            }
        }

        tracing::info!(
            mode = self.mode(),
            resolved = featured.resolved_count(),
            "featured items collected"
        );
        featured
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::application::services::featured_resolver::tests::{FixtureReader, item};
    use crate::domain::entities::catalog_item::CatalogItemBuilder;
    use crate::domain::value_objects::Timestamp;
    use crate::infrastructure::readers::error::{ReaderError, ReaderResult};
    use crate::infrastructure::readers::traits::CategoryReader;
    use async_trait::async_trait;

    fn engine(reader: FixtureReader) -> FeaturedAggregationEngine {
        FeaturedAggregationEngine::new(Arc::new(FeaturedResolver::new(Arc::new(reader))))
    }

    fn populated_except(failing: Vec<Category>) -> FixtureReader {
        FixtureReader {
            collections: Category::ALL
                .iter()
                .map(|c| (*c, vec![item(c.as_str(), false, true, 100)]))
                .collect(),
            failing,
            ..Default::default()
        }
    }

    fn id_of(featured: &FeaturedItems, category: Category) -> Option<String> {
        featured.get(category).map(|i| i.id().to_string())
    }

    #[tokio::test]
    async fn collects_all_six() {
        let featured = engine(populated_except(vec![])).collect_featured().await;
        assert_eq!(featured.resolved_count(), 6);
        for category in Category::ALL {
            assert_eq!(id_of(&featured, category).as_deref(), Some(category.as_str()));
        }
    }

    #[tokio::test]
    async fn one_failing_category_is_null() {
        for failing in Category::ALL {
            let featured = engine(populated_except(vec![failing])).collect_featured().await;
            assert_eq!(featured.resolved_count(), 5);
            assert!(featured.get(failing).is_none());
        }
    }

    #[tokio::test]
    async fn unreachable_store_yields_all_null() {
        let reader = FixtureReader {
            unavailable: true,
            ..populated_except(vec![])
        };
        let featured = engine(reader).collect_featured().await;
        assert_eq!(featured, FeaturedItems::empty());
    }

    #[tokio::test]
    async fn mixed_scenario() {
        let reader = FixtureReader {
            collections: vec![
                (
                    Category::Service,
                    vec![item("1", false, true, 10), item("2", true, true, 0)],
                ),
                (Category::Tour, vec![]),
                (Category::Package, vec![item("3", false, false, 20)]),
                (Category::Rental, vec![item("r", true, true, 5)]),
                (Category::Hotel, vec![item("4", false, true, 30)]),
                (Category::Resort, vec![item("5", true, false, 40)]),
            ],
            failing: vec![Category::Rental],
            ..Default::default()
        };

        let featured = engine(reader).collect_featured().await;

        assert_eq!(id_of(&featured, Category::Service).as_deref(), Some("2"));
        assert_eq!(id_of(&featured, Category::Tour), None);
        assert_eq!(id_of(&featured, Category::Package).as_deref(), Some("3"));
        assert_eq!(id_of(&featured, Category::Rental), None);
        assert_eq!(id_of(&featured, Category::Hotel).as_deref(), Some("4"));
        assert_eq!(id_of(&featured, Category::Resort).as_deref(), Some("5"));
    }

    #[derive(Debug)]
    struct PanickingReader;

    #[async_trait]
    impl CategoryReader for PanickingReader {
        fn mode(&self) -> &'static str {
            "panicking"
        }

        async fn list_featured(&self, category: Category) -> ReaderResult<Vec<CatalogItem>> {
            if category == Category::Tour {
                panic!("reader bug");
            }
            Ok(vec![CatalogItemBuilder::new(Timestamp::now()).featured(true).build()])
        }

        async fn list_active_by_recency(
            &self,
            _category: Category,
        ) -> ReaderResult<Vec<CatalogItem>> {
            Err(ReaderError::internal("unused"))
        }

        async fn list_any(&self, _category: Category) -> ReaderResult<Vec<CatalogItem>> {
            Err(ReaderError::internal("unused"))
        }
    }

    #[tokio::test]
    async fn panicking_lookup_degrades_only_its_category() {
        let engine =
            FeaturedAggregationEngine::new(Arc::new(FeaturedResolver::new(Arc::new(PanickingReader))));
        let featured = engine.collect_featured().await;
        assert!(featured.tour.is_none());
        assert_eq!(featured.resolved_count(), 5);
    }

    #[test]
    fn serializes_six_keys_in_order() {
        let mut featured = FeaturedItems::empty();
        featured.set(Category::Hotel, Some(item("h", false, true, 0)));

        let json = serde_json::to_string(&featured).unwrap();
        let keys = ["service", "tour", "package", "rental", "hotel", "resort"];
        let mut last = 0;
        for key in keys {
            let pos = json.find(&format!("\"{}\":", key)).unwrap();
            assert!(pos >= last);
            last = pos;
        }
        assert!(json.contains("\"tour\":null"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 6);
        assert_eq!(value["hotel"]["id"], "h");
    }

    #[tokio::test]
    async fn mode_and_availability() {
        let engine = engine(populated_except(vec![]));
        assert_eq!(engine.mode(), "fixture");
        assert!(engine.is_available().await);
    }
}
