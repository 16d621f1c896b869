//! Filesystem-backed snapshot repository.
//!
//! Snapshots live in a flat data directory as JSON files named
//! `shorturls-YYYYMMDD.gz.data`, one per dump, written by the `extract_data`
//! cron job. Files are immutable once written.

use crate::domain::entities::Snapshot;
use crate::domain::repositories::SnapshotRepository;
use crate::error::AppError;
use crate::utils::dump_names;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads snapshots from the extracted data directory.
pub struct FsSnapshotRepository {
    data_dir: PathBuf,
}

impl FsSnapshotRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.data_dir.join(dump_names::data_file_name(date))
    }
}

#[async_trait]
impl SnapshotRepository for FsSnapshotRepository {
    async fn list_dates(&self) -> Result<Vec<NaiveDate>, AppError> {
        let mut entries = fs::read_dir(&self.data_dir).await.map_err(|e| {
            AppError::internal(
                "Failed to read data directory",
                json!({ "dir": self.data_dir.display().to_string(), "error": e.to_string() }),
            )
        })?;

        let mut dates = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            AppError::internal("Failed to read data directory", json!({ "error": e.to_string() }))
        })? {
            // Anything that doesn't match the data file naming scheme is
            // ignored, so stray files in the directory are harmless.
            if let Some(date) = entry
                .file_name()
                .to_str()
                .and_then(dump_names::data_date)
            {
                dates.push(date);
            }
        }

        dates.sort_unstable();
        Ok(dates)
    }

    async fn latest_date(&self) -> Result<Option<NaiveDate>, AppError> {
        Ok(self.list_dates().await?.pop())
    }

    async fn load(&self, date: NaiveDate) -> Result<Option<Snapshot>, AppError> {
        let path = self.path_for(date);

        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::internal(
                    "Failed to read snapshot file",
                    json!({ "path": path.display().to_string(), "error": e.to_string() }),
                ));
            }
        };

        let snapshot = serde_json::from_str(&raw).map_err(|e| {
            AppError::internal(
                "Corrupt snapshot file",
                json!({ "path": path.display().to_string(), "error": e.to_string() }),
            )
        })?;

        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DomainCount;

    fn write_snapshot(dir: &Path, name: &str, snapshot: &Snapshot) {
        std::fs::write(dir.join(name), serde_json::to_string(snapshot).unwrap()).unwrap();
    }

    fn sample() -> Snapshot {
        Snapshot {
            stats: vec![DomainCount {
                domain: "en.wikipedia.org".to_string(),
                count: 7,
            }],
            total: 7,
        }
    }

    #[tokio::test]
    async fn test_list_dates_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(dir.path(), "shorturls-20200105.gz.data", &sample());
        write_snapshot(dir.path(), "shorturls-20191201.gz.data", &sample());
        std::fs::write(dir.path().join("README"), "not a snapshot").unwrap();

        let repo = FsSnapshotRepository::new(dir.path());
        let dates = repo.list_dates().await.unwrap();

        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2019, 12, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 1, 5).unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn test_latest_date() {
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(dir.path(), "shorturls-20200105.gz.data", &sample());
        write_snapshot(dir.path(), "shorturls-20200301.gz.data", &sample());

        let repo = FsSnapshotRepository::new(dir.path());
        assert_eq!(
            repo.latest_date().await.unwrap(),
            NaiveDate::from_ymd_opt(2020, 3, 1)
        );
    }

    #[tokio::test]
    async fn test_latest_date_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FsSnapshotRepository::new(dir.path());
        assert_eq!(repo.latest_date().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(dir.path(), "shorturls-20200105.gz.data", &sample());

        let repo = FsSnapshotRepository::new(dir.path());
        let date = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
        let snapshot = repo.load(date).await.unwrap().unwrap();

        assert_eq!(snapshot, sample());
    }

    #[tokio::test]
    async fn test_load_missing_date() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FsSnapshotRepository::new(dir.path());
        let date = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
        assert_eq!(repo.load(date).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shorturls-20200105.gz.data"), "{nope").unwrap();

        let repo = FsSnapshotRepository::new(dir.path());
        let date = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
        assert!(repo.load(date).await.is_err());
    }
}
