//! Repository trait for snapshot access.

use crate::domain::entities::Snapshot;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read access to the extracted per-day snapshots.
///
/// Implemented by
/// [`crate::infrastructure::persistence::FsSnapshotRepository`] over the data
/// directory the `extract_data` cron job writes into.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// All dates a snapshot exists for, ascending.
    async fn list_dates(&self) -> Result<Vec<NaiveDate>, AppError>;

    /// Date of the most recent snapshot, `None` when no data has been
    /// extracted yet.
    async fn latest_date(&self) -> Result<Option<NaiveDate>, AppError>;

    /// Loads the snapshot for one date.
    ///
    /// Returns `Ok(None)` when no snapshot exists for that date.
    async fn load(&self, date: NaiveDate) -> Result<Option<Snapshot>, AppError>;
}
