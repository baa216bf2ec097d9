//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`FeaturedResolver`]: three-tier featured lookup for one collection
//! - [`FeaturedAggregationEngine`]: concurrent lookup across all collections

pub mod featured_aggregation;
pub mod featured_resolver;

pub use featured_aggregation::{FeaturedAggregationEngine, FeaturedItems};
pub use featured_resolver::{FeaturedResolver, Resolution};
