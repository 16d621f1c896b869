//! Snapshot statistics service.

use std::sync::Arc;

use crate::domain::entities::{DomainCount, Snapshot};
use crate::domain::repositories::SnapshotRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use chrono::NaiveDate;
use serde_json::json;

/// Service for reading extracted statistics.
///
/// Sits between the HTTP handlers and the snapshot files, with a cache-aside
/// read path: snapshots are served from cache when present, otherwise loaded
/// from the repository and written back with the configured TTL.
pub struct StatsService {
    repository: Arc<dyn SnapshotRepository>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: u64,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(
        repository: Arc<dyn SnapshotRepository>,
        cache: Arc<dyn CacheService>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            repository,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Date of the most recent snapshot, if any data has been extracted.
    pub async fn latest_date(&self) -> Result<Option<NaiveDate>, AppError> {
        self.repository.latest_date().await
    }

    /// Retrieves the most recent snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no data files exist yet.
    pub async fn latest(&self) -> Result<Snapshot, AppError> {
        let date = self
            .repository
            .latest_date()
            .await?
            .ok_or_else(|| AppError::not_found("No statistics extracted yet", json!({})))?;

        self.snapshot_at(date).await?.ok_or_else(|| {
            AppError::internal(
                "Latest snapshot file disappeared",
                json!({ "date": date.to_string() }),
            )
        })
    }

    /// Retrieves the snapshot for one date, consulting the cache first.
    ///
    /// Cache failures degrade silently to a repository read.
    pub async fn snapshot_at(&self, date: NaiveDate) -> Result<Option<Snapshot>, AppError> {
        if let Ok(Some(snapshot)) = self.cache.get_snapshot(date).await {
            return Ok(Some(snapshot));
        }

        let snapshot = self.repository.load(date).await?;

        if let Some(ref snapshot) = snapshot {
            let _ = self
                .cache
                .set_snapshot(date, snapshot, Some(self.cache_ttl_seconds))
                .await;
        }

        Ok(snapshot)
    }

    /// Latest count for a single destination hostname.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the hostname does not appear in
    /// the latest snapshot, or when no data has been extracted yet.
    pub async fn domain(&self, domain: &str) -> Result<DomainCount, AppError> {
        let snapshot = self.latest().await?;

        snapshot
            .count_for(domain)
            .map(|count| DomainCount {
                domain: domain.to_string(),
                count,
            })
            .ok_or_else(|| {
                AppError::not_found("Unknown domain specified", json!({ "domain": domain }))
            })
    }

    /// Per-day grand totals across all snapshots, ascending by date.
    pub async fn total_history(&self) -> Result<Vec<(NaiveDate, i64)>, AppError> {
        let mut points = Vec::new();
        for date in self.repository.list_dates().await? {
            if let Some(snapshot) = self.snapshot_at(date).await? {
                points.push((date, snapshot.total));
            }
        }
        Ok(points)
    }

    /// Per-day counts for one hostname, ascending by date.
    ///
    /// Days where the hostname does not appear are skipped rather than
    /// reported as zero, matching the sparse data files.
    pub async fn domain_history(&self, domain: &str) -> Result<Vec<(NaiveDate, i64)>, AppError> {
        let mut points = Vec::new();
        for date in self.repository.list_dates().await? {
            if let Some(snapshot) = self.snapshot_at(date).await?
                && let Some(count) = snapshot.count_for(domain)
            {
                points.push((date, count));
            }
        }
        Ok(points)
    }
}
