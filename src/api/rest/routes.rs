//! # REST Routes
//!
//! Router construction.

use crate::api::rest::handlers::{AppState, get_featured, get_item, health_check, list_category};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the API router.
///
/// Static routes (`featured`, `health`) take precedence over the
/// `{collection}` parameter.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health_check))
        .route("/api/v1/featured", get(get_featured))
        .route("/api/v1/{collection}", get(list_category))
        .route("/api/v1/{collection}/{id}", get(get_item))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::{FeaturedAggregationEngine, FeaturedResolver};
    use crate::domain::entities::catalog_item::CatalogItemBuilder;
    use crate::domain::value_objects::{Category, Timestamp};
    use crate::infrastructure::persistence::CatalogRepository;
    use crate::infrastructure::persistence::in_memory::InMemoryCatalogRepository;
    use crate::infrastructure::readers::DirectCategoryReader;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn router() -> Router {
        let repository = Arc::new(InMemoryCatalogRepository::new());
        for (id, featured, created) in [("h1", false, 100), ("h2", true, 50), ("h3", false, 300)] {
            let item = CatalogItemBuilder::new(Timestamp::from_secs(created).unwrap())
                .id(id)
                .featured(featured)
                .title(format!("Hotel {id}"))
                .build();
            repository.save(Category::Hotel, &item).await.unwrap();
        }

        let reader = Arc::new(DirectCategoryReader::new(repository.clone()));
        let engine = FeaturedAggregationEngine::new(Arc::new(FeaturedResolver::new(reader)));
        create_router(Arc::new(AppState::new(engine, repository)))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn featured_endpoint() {
        let (status, body) = get_json(router().await, "/api/v1/featured").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["hotel"]["id"], "h2");
        assert!(body["data"]["tour"].is_null());
    }

    #[tokio::test]
    async fn list_with_query() {
        let (status, body) =
            get_json(router().await, "/api/v1/hotels?sort=recent&limit=2").await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["h3", "h1"]);

        let (_, body) = get_json(router().await, "/api/v1/hotel?featured=true").await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_collection_is_404() {
        let (status, body) = get_json(router().await, "/api/v1/spaceships").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn malformed_query_is_400() {
        let (status, body) = get_json(router().await, "/api/v1/hotels?limit=lots").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn get_item_found_and_missing() {
        let (status, body) = get_json(router().await, "/api/v1/hotels/h1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "Hotel h1");

        let (status, body) = get_json(router().await, "/api/v1/hotels/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn health_reports_mode() {
        let (status, body) = get_json(router().await, "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mode"], "direct");
    }
}
