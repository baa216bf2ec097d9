//! # Domain Layer
//!
//! Catalog entities, value objects and the featured selection policy.
//! Nothing in here performs I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
