//! Cache service trait and error types.

use crate::domain::entities::Snapshot;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching parsed snapshots.
///
/// Snapshot files are immutable once the extractor has written them, so a
/// cached entry never needs invalidation and simply ages out via its TTL.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application (cache failures should degrade to data file
/// reads).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the snapshot for a date from cache.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(snapshot))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get_snapshot(&self, date: NaiveDate) -> CacheResult<Option<Snapshot>>;

    /// Stores a snapshot in cache with optional TTL.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations should log
    /// errors and return `Ok(())` to avoid disrupting the request flow.
    async fn set_snapshot(
        &self,
        date: NaiveDate,
        snapshot: &Snapshot,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health check endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
