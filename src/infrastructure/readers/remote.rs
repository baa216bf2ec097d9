//! # Remote Category Reader
//!
//! Reads collections over HTTP from the catalog API
//! (`GET {base_url}/api/v1/{collection}`).
//!
//! Filters are sent as query parameters, and applied again locally, so the
//! reader also works against upstreams that only support an unfiltered list.
//! Payloads may be a bare JSON array or an object wrapping one under `data`,
//! `items`, or the collection name. Anything else is treated as an empty
//! collection. List entries that don't decode as items are skipped.

use crate::domain::entities::catalog_item::CatalogItem;
use crate::domain::services::featured_policy::sort_by_recency;
use crate::domain::value_objects::{Category, SortOrder};
use crate::infrastructure::persistence::traits::ItemQuery;
use crate::infrastructure::readers::error::ReaderResult;
use crate::infrastructure::readers::http_client::HttpClient;
use crate::infrastructure::readers::traits::CategoryReader;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Keys under which a wrapped list may be found, besides the collection name.
const WRAPPER_KEYS: [&str; 2] = ["data", "items"];

/// Query parameters understood by the category list endpoint.
#[derive(Debug, Serialize)]
struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<SortOrder>,
}

impl From<&ItemQuery> for ListParams {
    fn from(query: &ItemQuery) -> Self {
        Self {
            featured: query.featured,
            active: query.active,
            sort: (query.sort != SortOrder::Natural).then_some(query.sort),
        }
    }
}

/// [`CategoryReader`] that calls the catalog HTTP API.
#[derive(Debug, Clone)]
pub struct RemoteCategoryReader {
    client: HttpClient,
    base_url: String,
}

impl RemoteCategoryReader {
    /// Creates a reader targeting `base_url` (scheme, host and port).
    #[must_use]
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Returns the list URL of a collection.
    #[must_use]
    pub fn collection_url(&self, category: Category) -> String {
        format!("{}/api/v1/{}", self.base_url, category.collection())
    }

    async fn fetch(&self, category: Category, query: &ItemQuery) -> ReaderResult<Vec<CatalogItem>> {
        let url = self.collection_url(category);
        let payload: Value = self
            .client
            .get_with_params(&url, &ListParams::from(query))
            .await?;

        let mut items: Vec<CatalogItem> = extract_items(category, payload)
            .into_iter()
            .filter(|item| query.matches(item))
            .collect();
        if query.sort == SortOrder::Recent {
            sort_by_recency(&mut items);
        }
        Ok(items)
    }
}

#[async_trait]
impl CategoryReader for RemoteCategoryReader {
    fn mode(&self) -> &'static str {
        "remote"
    }

    async fn list_featured(&self, category: Category) -> ReaderResult<Vec<CatalogItem>> {
        self.fetch(category, &ItemQuery::featured()).await
    }

    async fn list_active_by_recency(&self, category: Category) -> ReaderResult<Vec<CatalogItem>> {
        self.fetch(category, &ItemQuery::active_by_recency()).await
    }

    async fn list_any(&self, category: Category) -> ReaderResult<Vec<CatalogItem>> {
        self.fetch(category, &ItemQuery::all()).await
    }

    /// Checks the bare base URL, never a route that itself checks
    /// availability (a server may be its own upstream).
    async fn ensure_available(&self) -> ReaderResult<()> {
        let status = self.client.check_reachable(&self.base_url).await?;
        tracing::debug!(%status, "remote catalog reachable");
        Ok(())
    }
}

/// Pulls catalog items out of a list payload.
///
/// Malformed payloads yield an empty list.
#[must_use]
pub fn extract_items(category: Category, payload: Value) -> Vec<CatalogItem> {
    let entries = match payload {
        Value::Array(entries) => entries,
        Value::Object(mut map) => {
            let key = WRAPPER_KEYS
                .iter()
                .copied()
                .chain([category.collection(), category.as_str()])
                .find(|k| map.get(*k).is_some_and(Value::is_array));
            match key.and_then(|k| map.remove(k)) {
                Some(Value::Array(entries)) => entries,
                _ => {
                    tracing::warn!(%category, "payload object wraps no item list, treating as empty");
                    return Vec::new();
                }
            }
        }
        other => {
            tracing::warn!(%category, kind = json_kind(&other), "payload is not a list, treating as empty");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| match CatalogItem::from_json(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(%category, error = %e, "skipping undecodable item");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
