//! # REST API
//!
//! Public read endpoints of the catalog, served with axum.
//!
//! # Endpoints
//!
//! ## Featured
//! - `GET /api/v1/featured` - One representative item per collection
//!
//! ## Collections
//! - `GET /api/v1/{collection}` - List a collection (`featured`, `active`,
//!   `sort`, `limit` query parameters)
//! - `GET /api/v1/{collection}/{id}` - Get an item by id
//!
//! `{collection}` is one of `services`, `tours`, `packages`, `rentals`,
//! `hotels`, `resorts`; singular names are accepted too.
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use travel_catalog::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(engine, repository));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, ApiResponse, AppState, ErrorResponse, HealthResponse};
pub use routes::create_router;
