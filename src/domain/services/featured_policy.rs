//! # Featured Selection Policy
//!
//! Vocabulary of the representative-item choice for one collection.
//!
//! Tiers, in strict priority order:
//!
//! 1. the first item that is featured and active;
//! 2. otherwise the most recently created active item;
//! 3. otherwise the first item of any kind;
//! 4. otherwise nothing (empty collection).
//!
//! "First" always means the store's natural order. Several featured items
//! are allowed; the first wins. The tiers are evaluated against a
//! `CategoryReader` by the application-layer `FeaturedResolver`.

use crate::domain::entities::catalog_item::CatalogItem;
use std::fmt;

/// The tier that produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeaturedTier {
    /// Featured and active.
    Featured,
    /// Most recent active item.
    RecentActive,
    /// Any item, as a last resort.
    AnyItem,
}

impl fmt::Display for FeaturedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Featured => write!(f, "featured"),
            Self::RecentActive => write!(f, "recent_active"),
            Self::AnyItem => write!(f, "any_item"),
        }
    }
}

/// Sorts items by `createdAt`, most recent first.
///
/// The sort is stable, so items created at the same instant keep their
/// natural order.
///
/// # Examples
///
/// ```
/// use travel_catalog::domain::entities::catalog_item::CatalogItemBuilder;
/// use travel_catalog::domain::services::featured_policy::sort_by_recency;
/// use travel_catalog::domain::value_objects::Timestamp;
///
/// let t0 = Timestamp::from_secs(1_000).unwrap();
/// let mut items = vec![
///     CatalogItemBuilder::new(t0).id("old").build(),
///     CatalogItemBuilder::new(t0.add_secs(10)).id("new").build(),
/// ];
///
/// sort_by_recency(&mut items);
/// assert_eq!(items[0].id().as_str(), "new");
/// ```
pub fn sort_by_recency(items: &mut [CatalogItem]) {
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::catalog_item::CatalogItemBuilder;
    use crate::domain::value_objects::Timestamp;

    fn item(id: &str, created: i64) -> CatalogItem {
        CatalogItemBuilder::new(Timestamp::from_secs(created).unwrap())
            .id(id)
            .build()
    }

    #[test]
    fn tier_names() {
        assert_eq!(FeaturedTier::Featured.to_string(), "featured");
        assert_eq!(FeaturedTier::RecentActive.to_string(), "recent_active");
        assert_eq!(FeaturedTier::AnyItem.to_string(), "any_item");
    }

    #[test]
    fn recency_tie_keeps_natural_order() {
        let mut items = vec![item("x", 100), item("y", 100)];
        sort_by_recency(&mut items);
        assert_eq!(items[0].id().as_str(), "x");
    }

    #[test]
    fn sort_by_recency_is_descending() {
        let mut items = vec![item("1", 100), item("2", 300), item("3", 200)];
        sort_by_recency(&mut items);
        let ids: Vec<&str> = items.iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn undated_items_sort_last() {
        let mut items = vec![
            CatalogItem::from_json(serde_json::json!({ "id": "undated" })).unwrap(),
            item("dated", 1),
        ];
        sort_by_recency(&mut items);
        assert_eq!(items[1].id().as_str(), "undated");
    }
}
