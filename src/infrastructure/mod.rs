//! # Infrastructure Layer
//!
//! Adapters for the outside world.
//!
//! - [`persistence`]: catalog storage (in-memory, PostgreSQL) and seeding
//! - [`readers`]: direct and remote [`CategoryReader`](readers::CategoryReader)s

pub mod persistence;
pub mod readers;
