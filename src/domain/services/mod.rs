//! # Domain Services
//!
//! Catalog logic that doesn't belong to a single entity.
//!
//! ## Services
//!
//! - [`featured_policy`]: featured tiers and recency order

pub mod featured_policy;

pub use featured_policy::{FeaturedTier, sort_by_recency};
