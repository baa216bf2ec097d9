//! # Domain Entities
//!
//! - [`CatalogItem`]: an entry in one of the six catalog collections

pub mod catalog_item;

pub use catalog_item::{CatalogItem, CatalogItemBuilder};
