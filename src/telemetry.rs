//! # Telemetry
//!
//! Global `tracing` subscriber setup.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::{LogConfig, LogFormat};
use tracing_subscriber::{EnvFilter, fmt};

/// Builds the event filter: `RUST_LOG` when set, else the configured level.
#[must_use]
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an internal error if a global subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> ApplicationResult<()> {
    let filter = env_filter(config);
    let result = match config.format {
        LogFormat::Json => fmt().with_env_filter(filter).json().try_init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).try_init(),
    };
    result.map_err(|e| ApplicationError::internal(format!("tracing init failed: {e}")))
}
