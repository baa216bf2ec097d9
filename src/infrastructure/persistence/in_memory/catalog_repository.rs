//! # In-Memory Catalog Repository
//!
//! In-memory implementation of [`CatalogRepository`].
//!
//! Items are kept per category in insertion order, which is the natural
//! order the featured policy relies on for its "first item" tiers.

use crate::domain::entities::catalog_item::CatalogItem;
use crate::domain::services::featured_policy::sort_by_recency;
use crate::domain::value_objects::{Category, ItemId, SortOrder};
use crate::infrastructure::persistence::traits::{CatalogRepository, ItemQuery, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`CatalogRepository`].
///
/// Uses a thread-safe `HashMap` of per-category vectors. Suitable for unit
/// tests and for running the service without a database.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogRepository {
    storage: Arc<RwLock<HashMap<Category, Vec<CatalogItem>>>>,
}

impl InMemoryCatalogRepository {
    /// Creates a new empty in-memory catalog repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn save(&self, category: Category, item: &CatalogItem) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        let items = storage.entry(category).or_default();
        match items.iter_mut().find(|i| i.id() == item.id()) {
            Some(existing) => *existing = item.clone(),
            None => items.push(item.clone()),
        }
        Ok(())
    }

    async fn get(&self, category: Category, id: &ItemId) -> RepositoryResult<Option<CatalogItem>> {
        let storage = self.storage.read().await;
        Ok(storage
            .get(&category)
            .and_then(|items| items.iter().find(|i| i.id() == id))
            .cloned())
    }

    async fn list(
        &self,
        category: Category,
        query: &ItemQuery,
    ) -> RepositoryResult<Vec<CatalogItem>> {
        let storage = self.storage.read().await;
        let mut items: Vec<CatalogItem> = storage
            .get(&category)
            .map(|items| items.iter().filter(|i| query.matches(i)).cloned().collect())
            .unwrap_or_default();

        if query.sort == SortOrder::Recent {
            sort_by_recency(&mut items);
        }
        if let Some(limit) = query.limit {
            items.truncate(limit);
        }
        Ok(items)
    }

    async fn delete(&self, category: Category, id: &ItemId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        let Some(items) = storage.get_mut(&category) else {
            return Ok(false);
        };
        let before = items.len();
        items.retain(|i| i.id() != id);
        Ok(items.len() != before)
    }

    async fn count(&self, category: Category) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.get(&category).map_or(0, Vec::len) as u64)
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::catalog_item::CatalogItemBuilder;
    use crate::domain::value_objects::Timestamp;

    fn item(id: &str, featured: bool, active: bool, created: i64) -> CatalogItem {
        CatalogItemBuilder::new(Timestamp::from_secs(created).unwrap())
            .id(id)
            .featured(featured)
            .active(active)
            .build()
    }

    async fn seeded() -> InMemoryCatalogRepository {
        let repo = InMemoryCatalogRepository::new();
        repo.save(Category::Tour, &item("t1", false, true, 100))
            .await
            .unwrap();
        repo.save(Category::Tour, &item("t2", true, true, 50))
            .await
            .unwrap();
        repo.save(Category::Tour, &item("t3", false, false, 300))
            .await
            .unwrap();
        repo.save(Category::Tour, &item("t4", false, true, 200))
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryCatalogRepository::new();
        for category in Category::ALL {
            assert_eq!(repo.count(category).await.unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = seeded().await;
        let found = repo
            .get(Category::Tour, &ItemId::new("t2"))
            .await
            .unwrap()
            .unwrap();
        assert!(found.is_featured());

        let other_category = repo.get(Category::Hotel, &ItemId::new("t2")).await.unwrap();
        assert!(other_category.is_none());
    }

    #[tokio::test]
    async fn save_replaces_in_place() {
        let repo = seeded().await;
        repo.save(Category::Tour, &item("t1", true, true, 100))
            .await
            .unwrap();

        let all = repo.list(Category::Tour, &ItemQuery::all()).await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id().as_str(), "t1");
        assert!(all[0].is_featured());
    }

    #[tokio::test]
    async fn list_all_keeps_insertion_order() {
        let repo = seeded().await;
        let ids: Vec<String> = repo
            .list(Category::Tour, &ItemQuery::all())
            .await
            .unwrap()
            .iter()
            .map(|i| i.id().to_string())
            .collect();
        assert_eq!(ids, vec!["t1", "t2", "t3", "t4"]);
    }

    #[tokio::test]
    async fn list_featured() {
        let repo = seeded().await;
        let featured = repo
            .list(Category::Tour, &ItemQuery::featured())
            .await
            .unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id().as_str(), "t2");
    }

    #[tokio::test]
    async fn list_active_by_recency() {
        let repo = seeded().await;
        let ids: Vec<String> = repo
            .list(Category::Tour, &ItemQuery::active_by_recency())
            .await
            .unwrap()
            .iter()
            .map(|i| i.id().to_string())
            .collect();
        assert_eq!(ids, vec!["t4", "t1", "t2"]);
    }

    #[tokio::test]
    async fn list_respects_limit() {
        let repo = seeded().await;
        let limited = repo
            .list(Category::Tour, &ItemQuery::all().with_limit(2))
            .await
            .unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[tokio::test]
    async fn list_unknown_category_is_empty() {
        let repo = seeded().await;
        let resorts = repo.list(Category::Resort, &ItemQuery::all()).await.unwrap();
        assert!(resorts.is_empty());
    }

    #[tokio::test]
    async fn delete() {
        let repo = seeded().await;
        assert!(repo.delete(Category::Tour, &ItemId::new("t1")).await.unwrap());
        assert!(!repo.delete(Category::Tour, &ItemId::new("t1")).await.unwrap());
        assert!(!repo.delete(Category::Hotel, &ItemId::new("t1")).await.unwrap());
        assert_eq!(repo.count(Category::Tour).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn count_waits_for_a_writer_instead_of_reporting_empty() {
        let repo = seeded().await;
        let guard = repo.storage.write().await;

        let reader = repo.clone();
        let pending = tokio::spawn(async move { reader.count(Category::Tour).await });
        tokio::task::yield_now().await;
        assert!(!pending.is_finished());

        drop(guard);
        assert_eq!(pending.await.unwrap().unwrap(), 4);
    }
}
