//! # Configuration
//!
//! Layered settings: built-in defaults, then an optional TOML file, then
//! `TRAVEL__`-prefixed environment variables (`TRAVEL__SERVER__PORT=8080`).

use crate::application::error::{ApplicationError, ApplicationResult};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TRAVEL";

/// Separator between prefix and nested keys.
pub const ENV_SEPARATOR: &str = "__";

/// How the featured resolver reads collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogMode {
    /// Query the catalog store in-process.
    #[default]
    Direct,
    /// Call the catalog HTTP API at `catalog.base_url`.
    Remote,
}

impl fmt::Display for CatalogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => f.write_str("direct"),
            Self::Remote => f.write_str("remote"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// IP address to listen on.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `host` is not an IP address.
    pub fn socket_addr(&self) -> ApplicationResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ApplicationError::configuration(format!("server.host: {e}")))
    }
}

/// Featured reader settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Whether featured lookups go to the store or over HTTP.
    pub mode: CatalogMode,
    /// Host targeted in remote mode.
    pub base_url: String,
    /// Per-request timeout of the remote reader.
    pub request_timeout_ms: u64,
}

/// Catalog store settings. Without a `url` the store is in-memory.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string.
    #[serde(default)]
    pub url: Option<String>,
    /// Upper bound of the connection pool.
    pub max_connections: u32,
}

/// Seed data settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// JSON document loaded into the store at startup.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Output format of the log subscriber.
    pub format: LogFormat,
}

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Featured reader.
    pub catalog: CatalogConfig,
    /// Catalog store.
    pub database: DatabaseConfig,
    /// Startup seed data.
    #[serde(default)]
    pub seed: SeedConfig,
    /// Logging.
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a source can't be read, a value has
    /// the wrong type, or validation fails.
    pub fn load(path: Option<&Path>) -> ApplicationResult<Self> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true);
        Self::from_sources(path, Some(env))
    }

    fn from_sources(path: Option<&Path>, env: Option<Environment>) -> ApplicationResult<Self> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")
            .and_then(|b| b.set_default("server.port", 3000_i64))
            .and_then(|b| b.set_default("catalog.mode", "direct"))
            .and_then(|b| b.set_default("catalog.base_url", "http://localhost:3000"))
            .and_then(|b| b.set_default("catalog.request_timeout_ms", 5000_i64))
            .and_then(|b| b.set_default("database.max_connections", 5_i64))
            .and_then(|b| b.set_default("log.level", "info"))
            .and_then(|b| b.set_default("log.format", "pretty"))
            .map_err(config_error)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        let config: Self = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges the types alone don't enforce.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending key.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.server.port == 0 {
            return Err(ApplicationError::configuration(
                "server.port must be non-zero",
            ));
        }
        if self.catalog.request_timeout_ms == 0 {
            return Err(ApplicationError::configuration(
                "catalog.request_timeout_ms must be non-zero",
            ));
        }
        let base_url = self.catalog.base_url.as_str();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApplicationError::configuration(format!(
                "catalog.base_url must be an http(s) URL, got {base_url:?}"
            )));
        }
        if self.database.max_connections == 0 {
            return Err(ApplicationError::configuration(
                "database.max_connections must be non-zero",
            ));
        }
        Ok(())
    }
}

fn config_error(err: config::ConfigError) -> ApplicationError {
    ApplicationError::configuration(err.to_string())
}
