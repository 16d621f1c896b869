//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::Snapshot;
use async_trait::async_trait;
use chrono::NaiveDate;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for parsed snapshots, keyed by dump date.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. All operations are fail-open: errors are logged but don't propagate
/// to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures
    /// the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied to cached snapshots when
    ///   [`CacheService::set_snapshot`] is called with `ttl_seconds = None`;
    ///   controlled via `CACHE_TTL_SECONDS` env var
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "shorturls:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, date: NaiveDate) -> String {
        format!("{}{}", self.key_prefix, date.format("%Y%m%d"))
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_snapshot(&self, date: NaiveDate) -> CacheResult<Option<Snapshot>> {
        let key = self.build_key(date);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(snapshot) => {
                    debug!("Cache HIT: {}", key);
                    metrics::counter!("cache_hits_total").increment(1);
                    Ok(Some(snapshot))
                }
                // Undeserializable entry, reread from disk and overwrite.
                Err(e) => {
                    warn!("Discarding corrupt cache entry {}: {}", key, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                metrics::counter!("cache_misses_total").increment(1);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set_snapshot(
        &self,
        date: NaiveDate,
        snapshot: &Snapshot,
        ttl: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(date);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl.unwrap_or(self.default_ttl);

        let json = match serde_json::to_string(snapshot) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize snapshot for {}: {}", key, e);
                return Ok(());
            }
        };

        match conn.set_ex::<_, _, ()>(&key, json, ttl_seconds).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
