//! # Value Objects
//!
//! Immutable types with domain semantics.
//!
//! - [`ItemId`]: opaque catalog item identifier
//! - [`Category`]: the six content collections
//! - [`SortOrder`]: listing order
//! - [`Timestamp`]: UTC creation time

pub mod enums;
pub mod ids;
pub mod timestamp;

pub use enums::{Category, ParseEnumError, SortOrder};
pub use ids::ItemId;
pub use timestamp::Timestamp;
