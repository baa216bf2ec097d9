//! # Catalog Seeding
//!
//! Loads a JSON seed document into a [`CatalogRepository`].
//!
//! The document maps collection names (singular or plural) to arrays of
//! items:
//!
//! ```json
//! {
//!   "services": [{ "id": "s-1", "title": "Airport transfer", "createdAt": "2024-01-01T00:00:00Z" }],
//!   "hotels": []
//! }
//! ```
//!
//! Items without an id get a generated one. Unknown collection names and
//! entries that don't decode are skipped with a warning.

use crate::domain::entities::catalog_item::CatalogItem;
use crate::domain::value_objects::{Category, ItemId};
use crate::infrastructure::persistence::traits::{CatalogRepository, RepositoryError, RepositoryResult};
use serde_json::Value;
use std::path::Path;

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Items written to the repository.
    pub inserted: usize,
    /// Entries skipped because they could not be decoded.
    pub skipped: usize,
}

/// Reads a seed file and writes its items.
///
/// # Errors
///
/// Returns `RepositoryError::Serialization` if the file cannot be read or is
/// not a JSON object, or the repository error of a failed write.
pub async fn seed_from_file(
    repository: &dyn CatalogRepository,
    path: &Path,
) -> RepositoryResult<SeedReport> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        RepositoryError::serialization(format!("cannot read seed file {}: {}", path.display(), e))
    })?;
    let document: Value = serde_json::from_str(&raw)
        .map_err(|e| RepositoryError::serialization(format!("invalid seed JSON: {}", e)))?;

    seed_from_value(repository, document).await
}

/// Writes the items of an already-parsed seed document.
///
/// # Errors
///
/// Returns `RepositoryError::Serialization` if the document is not an object,
/// or the repository error of a failed write.
pub async fn seed_from_value(
    repository: &dyn CatalogRepository,
    document: Value,
) -> RepositoryResult<SeedReport> {
    let Value::Object(collections) = document else {
        return Err(RepositoryError::serialization(
            "seed document must be an object keyed by collection",
        ));
    };

    let mut report = SeedReport::default();

    for (name, entries) in collections {
        let category = match name.parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                tracing::warn!(collection = %name, error = %e, "skipping unknown seed collection");
                continue;
            }
        };

        let Value::Array(entries) = entries else {
            tracing::warn!(%category, "seed collection is not an array, skipping");
            continue;
        };

        for entry in entries {
            match CatalogItem::from_json(with_generated_id(entry)) {
                Ok(item) => {
                    repository.save(category, &item).await?;
                    report.inserted += 1;
                }
                Err(e) => {
                    tracing::warn!(%category, error = %e, "skipping undecodable seed item");
                    report.skipped += 1;
                }
            }
        }
    }

    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "catalog seeded"
    );
    Ok(report)
}

fn with_generated_id(entry: Value) -> Value {
    match entry {
        Value::Object(mut map) if !map.contains_key("id") && !map.contains_key("_id") => {
            map.insert("id".to_string(), Value::String(ItemId::generate().to_string()));
            Value::Object(map)
        }
        other => other,
    }
}
