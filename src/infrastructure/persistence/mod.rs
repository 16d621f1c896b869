//! Snapshot persistence over the extracted data directory.

mod fs_snapshot_repository;

pub use fs_snapshot_repository::FsSnapshotRepository;
