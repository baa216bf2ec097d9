//! # PostgreSQL Catalog Repository
//!
//! PostgreSQL implementation of [`CatalogRepository`] using sqlx.
//!
//! All six collections share one `catalog_items` table keyed by
//! `(category, id)`. Collection-specific attributes live in a JSONB column.
//! `seq` is a serial column that records insertion order and serves as the
//! natural order of a collection.

use crate::domain::entities::catalog_item::CatalogItem;
use crate::domain::value_objects::{Category, ItemId, SortOrder};
use crate::infrastructure::persistence::traits::{
    CatalogRepository, ItemQuery, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Duration;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS catalog_items (
    seq         BIGSERIAL PRIMARY KEY,
    category    TEXT        NOT NULL,
    id          TEXT        NOT NULL,
    is_active   BOOLEAN     NOT NULL DEFAULT TRUE,
    is_featured BOOLEAN     NOT NULL DEFAULT FALSE,
    created_at  TIMESTAMPTZ NOT NULL,
    attributes  JSONB       NOT NULL DEFAULT '{}'::jsonb,
    UNIQUE (category, id)
);
CREATE INDEX IF NOT EXISTS catalog_items_recent_idx
    ON catalog_items (category, is_active, created_at DESC);
"#;

/// PostgreSQL implementation of [`CatalogRepository`].
///
/// # Examples
///
/// ```ignore
/// use travel_catalog::infrastructure::persistence::postgres::PostgresCatalogRepository;
///
/// let repo = PostgresCatalogRepository::connect("postgres://...", 5).await?;
/// repo.ensure_schema().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    /// Creates a repository over an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the database is unreachable.
    pub async fn connect(url: &str, max_connections: u32) -> RepositoryResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(url)
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Creates the `catalog_items` table and its index if missing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Query` if the DDL fails.
    pub async fn ensure_schema(&self) -> RepositoryResult<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn save(&self, category: Category, item: &CatalogItem) -> RepositoryResult<()> {
        let attributes = Value::Object(item.attributes().clone());

        sqlx::query(
            r#"
            INSERT INTO catalog_items (
                category, id, is_active, is_featured, created_at, attributes
            ) VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (category, id) DO UPDATE SET
                is_active = EXCLUDED.is_active,
                is_featured = EXCLUDED.is_featured,
                created_at = EXCLUDED.created_at,
                attributes = EXCLUDED.attributes
            "#,
        )
        .bind(category.collection())
        .bind(item.id().as_str())
        .bind(item.is_active())
        .bind(item.is_featured())
        .bind(*item.created_at().as_datetime())
        .bind(&attributes)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn get(&self, category: Category, id: &ItemId) -> RepositoryResult<Option<CatalogItem>> {
        let row: Option<ItemRow> = sqlx::query_as(
            r#"
            SELECT id, is_active, is_featured, created_at, attributes
            FROM catalog_items
            WHERE category = $1 AND id = $2
            "#,
        )
        .bind(category.collection())
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(ItemRow::try_into_item).transpose()
    }

    async fn list(
        &self,
        category: Category,
        query: &ItemQuery,
    ) -> RepositoryResult<Vec<CatalogItem>> {
        let mut qb = build_list_query(category, query);
        let rows: Vec<ItemRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(ItemRow::try_into_item).collect()
    }

    async fn delete(&self, category: Category, id: &ItemId) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM catalog_items WHERE category = $1 AND id = $2")
            .bind(category.collection())
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, category: Category) -> RepositoryResult<u64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM catalog_items WHERE category = $1")
                .bind(category.collection())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

/// Builds the SELECT for [`CatalogRepository::list`].
fn build_list_query(category: Category, query: &ItemQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT id, is_active, is_featured, created_at, attributes FROM catalog_items WHERE category = ",
    );
    qb.push_bind(category.collection());

    if let Some(featured) = query.featured {
        qb.push(" AND is_featured = ").push_bind(featured);
    }
    if let Some(active) = query.active {
        qb.push(" AND is_active = ").push_bind(active);
    }

    match query.sort {
        SortOrder::Natural => qb.push(" ORDER BY seq ASC"),
        SortOrder::Recent => qb.push(" ORDER BY created_at DESC, seq ASC"),
    };

    if let Some(limit) = query.limit {
        qb.push(" LIMIT ")
            .push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
    }

    qb
}

fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match error {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::connection(error.to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::serialization(error.to_string())
        }
        _ => RepositoryError::query(error.to_string()),
    }
}

/// Row type for item queries.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: String,
    is_active: bool,
    is_featured: bool,
    created_at: DateTime<Utc>,
    attributes: Value,
}

impl ItemRow {
    /// Converts the row into a CatalogItem.
    fn try_into_item(self) -> RepositoryResult<CatalogItem> {
        let attributes = match self.attributes {
            Value::Object(map) => map,
            Value::Null => serde_json::Map::new(),
            other => {
                return Err(RepositoryError::serialization(format!(
                    "attributes must be an object, got {}",
                    other
                )));
            }
        };

        Ok(CatalogItem::from_parts(
            ItemId::new(self.id),
            self.is_active,
            self.is_featured,
            self.created_at.into(),
            attributes,
        ))
    }
}
