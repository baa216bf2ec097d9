//! # Category Readers
//!
//! The [`CategoryReader`] port and its two implementations.
//!
//! # Modules
//!
//! - [`traits`]: the port
//! - [`direct`]: reads from the catalog store
//! - [`remote`]: reads from the catalog HTTP API
//! - [`http_client`]: `reqwest` wrapper used by the remote reader
//! - [`error`]: reader error types

pub mod direct;
pub mod error;
pub mod http_client;
pub mod remote;
pub mod traits;

pub use direct::DirectCategoryReader;
pub use error::{ReaderError, ReaderResult};
pub use http_client::HttpClient;
pub use remote::RemoteCategoryReader;
pub use traits::CategoryReader;
