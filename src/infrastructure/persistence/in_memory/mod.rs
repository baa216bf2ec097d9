//! # In-Memory Repositories
//!
//! In-memory implementations for testing without database dependencies.
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access.

pub mod catalog_repository;

pub use catalog_repository::InMemoryCatalogRepository;
