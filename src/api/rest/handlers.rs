//! # REST Handlers
//!
//! Request handlers, shared state and response envelopes.
//!
//! Every JSON body is wrapped in an envelope: `{ "success": true, "data": ... }`
//! on success, `{ "success": false, "error": "..." }` on failure. The health
//! endpoint is the exception and returns a flat status object.

use crate::application::error::ApplicationError;
use crate::application::services::{FeaturedAggregationEngine, FeaturedItems};
use crate::domain::entities::catalog_item::CatalogItem;
use crate::domain::value_objects::{Category, ItemId};
use crate::infrastructure::persistence::traits::{CatalogRepository, ItemQuery};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// State
// ============================================================================

/// Shared state of all handlers.
pub struct AppState {
    /// Featured aggregation over the configured reader.
    pub engine: FeaturedAggregationEngine,
    /// Catalog store backing the category endpoints.
    pub repository: Arc<dyn CatalogRepository>,
    /// Service version reported by the health endpoint.
    pub version: &'static str,
}

impl AppState {
    /// Creates state reporting the crate version.
    #[must_use]
    pub fn new(engine: FeaturedAggregationEngine, repository: Arc<dyn CatalogRepository>) -> Self {
        Self {
            engine,
            repository,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("mode", &self.engine.mode())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// Success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`.
    pub success: bool,
    /// Payload.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
}

impl ErrorResponse {
    /// Creates a failure envelope.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Featured reader mode.
    pub mode: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Error returned by handlers, rendered as a failure envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Unknown collection or item (404).
    #[error("{0}")]
    NotFound(String),

    /// Backing store unreachable (503).
    #[error("{0}")]
    Unavailable(String),

    /// Anything else (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status of this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else if err.is_validation() {
            Self::BadRequest(err.to_string())
        } else if err.is_unavailable() {
            Self::Unavailable(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

fn parse_collection(collection: &str) -> Result<Category, ApiError> {
    collection
        .parse::<Category>()
        .map_err(|_| ApiError::NotFound(format!("unknown collection: {collection}")))
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /api/v1/featured`
///
/// One representative item (or `null`) per collection. Lookup failures
/// degrade to `null` inside the engine, so this always succeeds.
pub async fn get_featured(State(state): State<Arc<AppState>>) -> ApiResult<FeaturedItems> {
    let featured = state.engine.collect_featured().await;
    Ok(Json(ApiResponse::ok(featured)))
}

/// `GET /api/v1/{collection}`
///
/// Lists a collection, filtered by `featured`/`active`, ordered by `sort`,
/// capped by `limit`.
pub async fn list_category(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
    query: Result<Query<ItemQuery>, QueryRejection>,
) -> ApiResult<Vec<CatalogItem>> {
    let category = parse_collection(&collection)?;
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let items = state
        .repository
        .list(category, &query)
        .await
        .map_err(ApplicationError::from)?;

    tracing::debug!(%category, count = items.len(), "collection listed");
    Ok(Json(ApiResponse::ok(items)))
}

/// `GET /api/v1/{collection}/{id}`
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult<CatalogItem> {
    let category = parse_collection(&collection)?;
    let id = ItemId::parse(&id).map_err(ApplicationError::from)?;

    let item = state
        .repository
        .get(category, &id)
        .await
        .map_err(ApplicationError::from)?
        .ok_or_else(|| ApplicationError::not_found(category.as_str(), id.as_str()))?;

    Ok(Json(ApiResponse::ok(item)))
}

/// `GET /api/v1/health`
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let status = if state.engine.is_available().await {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: state.version.to_string(),
        mode: state.engine.mode().to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::RepositoryError;

    #[test]
    fn application_errors_map_to_statuses() {
        let cases = [
            (
                ApplicationError::not_found("hotel", "h-1"),
                StatusCode::NOT_FOUND,
            ),
            (
                ApplicationError::validation("bad limit"),
                StatusCode::BAD_REQUEST,
            ),
            (
                RepositoryError::connection("refused").into(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                RepositoryError::query("syntax").into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn unknown_collection_is_not_found() {
        let err = parse_collection("spaceships").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("spaceships"));
        assert_eq!(parse_collection("Hotel").unwrap(), Category::Hotel);
    }

    #[test]
    fn envelopes_serialize() {
        let ok = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(ok, serde_json::json!({ "success": true, "data": [1, 2] }));

        let err = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(err, serde_json::json!({ "success": false, "error": "boom" }));
    }
}
