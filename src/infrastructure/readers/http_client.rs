//! # HTTP Client Utilities
//!
//! Thin wrapper over `reqwest` used by the remote category reader.
//!
//! Provides a configurable request timeout, JSON decoding, and mapping of
//! transport and status failures onto [`ReaderError`].
//!
//! # Examples
//!
//! ```ignore
//! use travel_catalog::infrastructure::readers::http_client::HttpClient;
//!
//! let client = HttpClient::new(5000)?;
//! let payload: serde_json::Value = client
//!     .get_with_params("http://localhost:3000/api/v1/tours", &[("active", "true")])
//!     .await?;
//! ```

use crate::infrastructure::readers::error::{ReaderError, ReaderResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for category reads.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `ReaderError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> ReaderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ReaderError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Makes a GET request with query parameters and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Returns `ReaderError::Connection` or `ReaderError::Timeout` if the
    /// request fails, `ReaderError::HttpStatus` on a non-success status and
    /// `ReaderError::Protocol` if the body is not valid JSON for `T`.
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> ReaderResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Checks that the host answers at all.
    ///
    /// Any HTTP response counts as reachable, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns `ReaderError::Connection` or `ReaderError::Timeout` if no
    /// response arrives.
    pub async fn check_reachable(&self, url: &str) -> ReaderResult<StatusCode> {
        self.client
            .get(url)
            .send()
            .await
            .map(|response| response.status())
            .map_err(map_reqwest_error)
    }
}

/// Checks the status and deserializes the JSON body.
async fn handle_response<T: DeserializeOwned>(response: Response) -> ReaderResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ReaderError::protocol(format!("Failed to parse response: {}", e)))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &body))
    }
}

/// Maps a reqwest error to a ReaderError.
fn map_reqwest_error(error: reqwest::Error) -> ReaderError {
    if error.is_timeout() {
        ReaderError::timeout("Request timed out")
    } else if error.is_connect() {
        ReaderError::connection(format!("Connection failed: {}", error))
    } else {
        ReaderError::connection(format!("HTTP request failed: {}", error))
    }
}

/// Maps an HTTP status code to a ReaderError.
fn map_status_error(status: StatusCode, body: &str) -> ReaderError {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    let message = if body.is_empty() {
        reason.to_string()
    } else {
        format!("{}: {}", reason, body)
    };
    ReaderError::http_status(status.as_u16(), message)
}
