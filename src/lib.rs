//! # Travel Catalog
//!
//! Catalog back end of a travel-agency site: six content collections
//! (services, tours, packages, rentals, hotels, resorts) and the featured
//! items aggregation that picks one representative item per collection.
//!
//! # Architecture
//!
//! - [`domain`]: catalog items, categories and the featured selection policy
//! - [`application`]: featured resolver and concurrent aggregation engine
//! - [`infrastructure`]: catalog store adapters and category readers
//! - [`api`]: axum REST endpoints
//! - [`config`]: layered settings
//! - [`telemetry`]: tracing subscriber setup
//!
//! # Reader modes
//!
//! The featured resolver reads collections through a
//! [`CategoryReader`](infrastructure::readers::CategoryReader). In `direct`
//! mode it queries the catalog store; in `remote` mode it calls the
//! catalog's own list endpoints over HTTP. Both degrade a failing collection
//! to `null` without affecting the others.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
