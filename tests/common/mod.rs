#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use shortstats::application::services::{ChartService, StatsService};
use shortstats::domain::entities::{DomainCount, Snapshot};
use shortstats::infrastructure::cache::NullCache;
use shortstats::infrastructure::persistence::FsSnapshotRepository;
use shortstats::state::AppState;
use tempfile::TempDir;

pub fn write_snapshot(dir: &Path, name: &str, snapshot: &Snapshot) {
    std::fs::write(dir.join(name), serde_json::to_string(snapshot).unwrap()).unwrap();
}

pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        stats: vec![
            DomainCount {
                domain: "en.wikipedia.org".to_string(),
                count: 1200,
            },
            DomainCount {
                domain: "www.wikidata.org".to_string(),
                count: 34,
            },
        ],
        total: 1234,
    }
}

pub fn create_test_state(data_dir: &Path) -> AppState {
    let repository = Arc::new(FsSnapshotRepository::new(data_dir));
    let cache = Arc::new(NullCache);
    let stats = Arc::new(StatsService::new(repository, cache.clone(), 60));
    let charts = Arc::new(ChartService::new(stats.clone()));
    AppState::new(stats, charts, cache)
}

/// State over a data directory holding one sample snapshot.
pub fn seeded_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), "shorturls-20200105.gz.data", &sample_snapshot());
    (create_test_state(dir.path()), dir)
}

/// State over an empty data directory (extractor never ran).
pub fn empty_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    (create_test_state(dir.path()), dir)
}
