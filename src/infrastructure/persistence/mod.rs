//! # Persistence Layer
//!
//! Catalog storage behind the [`CatalogRepository`] port.
//!
//! ## Implementations
//!
//! - `in_memory`: process-local storage for tests and local development
//! - `postgres`: PostgreSQL storage via sqlx
//! - `seed`: loading a JSON seed document into any repository

pub mod in_memory;
pub mod postgres;
pub mod seed;
pub mod traits;

pub use traits::{CatalogRepository, ItemQuery, RepositoryError, RepositoryResult};
