//! HTTP server initialization and runtime setup.
//!
//! Handles snapshot repository setup, cache selection, and Axum server
//! lifecycle.

use crate::application::services::{ChartService, StatsService};
use crate::config::Config;
use crate::domain::repositories::SnapshotRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::FsSnapshotRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Filesystem snapshot repository over `DATA_DIR`
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs. A missing or empty data directory is only
/// logged: the extractor may simply not have run yet, and every request
/// re-reads the directory.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(FsSnapshotRepository::new(&config.data_dir));

    match repository.latest_date().await {
        Ok(Some(date)) => tracing::info!("Serving snapshots up to {}", date),
        Ok(None) => tracing::warn!(
            "No snapshots found in {} (has extract_data run?)",
            config.data_dir
        ),
        Err(e) => tracing::warn!("Could not read data directory: {}", e.message()),
    }

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let stats = Arc::new(StatsService::new(
        repository,
        cache.clone(),
        config.cache_ttl_seconds,
    ));
    let charts = Arc::new(ChartService::new(stats.clone()));
    let state = AppState::new(stats, charts, cache);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
