//! travel-catalog server binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use travel_catalog::api::rest::{AppState, create_router};
use travel_catalog::application::services::{FeaturedAggregationEngine, FeaturedResolver};
use travel_catalog::config::{AppConfig, CatalogMode};
use travel_catalog::infrastructure::persistence::CatalogRepository;
use travel_catalog::infrastructure::persistence::in_memory::InMemoryCatalogRepository;
use travel_catalog::infrastructure::persistence::postgres::PostgresCatalogRepository;
use travel_catalog::infrastructure::persistence::seed::seed_from_file;
use travel_catalog::infrastructure::readers::{
    CategoryReader, DirectCategoryReader, HttpClient, RemoteCategoryReader,
};
use travel_catalog::telemetry::init_tracing;

/// Travel catalog API server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "TRAVEL_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.log)?;

    let repository = build_repository(&config).await?;

    if let Some(path) = &config.seed.path {
        seed_from_file(repository.as_ref(), path)
            .await
            .with_context(|| format!("seeding from {}", path.display()))?;
    }

    let reader = build_reader(&config, Arc::clone(&repository))?;
    let engine = FeaturedAggregationEngine::new(Arc::new(FeaturedResolver::new(reader)));
    let router = create_router(Arc::new(AppState::new(engine, repository)));

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, mode = %config.catalog.mode, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn build_repository(config: &AppConfig) -> Result<Arc<dyn CatalogRepository>> {
    match &config.database.url {
        Some(url) => {
            let repository =
                PostgresCatalogRepository::connect(url, config.database.max_connections)
                    .await
                    .context("connecting to the catalog database")?;
            repository
                .ensure_schema()
                .await
                .context("creating the catalog schema")?;
            tracing::info!(
                max_connections = config.database.max_connections,
                "using postgres catalog store"
            );
            Ok(Arc::new(repository))
        }
        None => {
            tracing::info!("no database configured, using in-memory catalog store");
            Ok(Arc::new(InMemoryCatalogRepository::new()))
        }
    }
}

fn build_reader(
    config: &AppConfig,
    repository: Arc<dyn CatalogRepository>,
) -> Result<Arc<dyn CategoryReader>> {
    match config.catalog.mode {
        CatalogMode::Direct => Ok(Arc::new(DirectCategoryReader::new(repository))),
        CatalogMode::Remote => {
            let client = HttpClient::new(config.catalog.request_timeout_ms)
                .context("building the HTTP client")?;
            tracing::info!(
                base_url = %config.catalog.base_url,
                timeout_ms = config.catalog.request_timeout_ms,
                "featured reader targets remote catalog"
            );
            Ok(Arc::new(RemoteCategoryReader::new(
                client,
                config.catalog.base_url.clone(),
            )))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        () = terminate => tracing::info!("received terminate signal, shutting down"),
    }
}
