//! End-to-end: dump file -> extractor -> snapshot repository -> service.

mod common;

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use flate2::{Compression, write::GzEncoder};
use shortstats::application::services::StatsService;
use shortstats::infrastructure::cache::NullCache;
use shortstats::infrastructure::persistence::FsSnapshotRepository;
use shortstats::ingest::Extractor;

fn write_dump(dir: &Path, name: &str, contents: &str) {
    let file = fs::File::create(dir.join(name)).unwrap();
    let mut gz = GzEncoder::new(file, Compression::default());
    gz.write_all(contents.as_bytes()).unwrap();
    gz.finish().unwrap();
}

#[tokio::test]
async fn test_extracted_dump_is_served() {
    let dumps = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();

    write_dump(
        dumps.path(),
        "shorturls-20200105.gz",
        "a1|https://en.wikipedia.org/wiki/Rust\n\
         a2|https://en.wikipedia.org/wiki/Crab\n\
         a3|https://www.wikidata.org/wiki/Q1\n\
         bad line\n",
    );
    write_dump(
        dumps.path(),
        "shorturls-20200106.gz",
        "b1|https://en.wikipedia.org/wiki/Rust\n",
    );

    let report = Extractor::new(dumps.path(), data.path()).run(false).unwrap();
    assert_eq!(report.written, 2);

    let repository = Arc::new(FsSnapshotRepository::new(data.path()));
    let service = StatsService::new(repository, Arc::new(NullCache), 60);

    // The newest dump wins for the index.
    let latest = service.latest().await.unwrap();
    assert_eq!(latest.total, 1);

    // History spans both days.
    let history = service.total_history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].1, 3);
    assert_eq!(history[1].1, 1);

    // Per-domain view of the latest snapshot.
    let entry = service.domain("en.wikipedia.org").await.unwrap();
    assert_eq!(entry.count, 1);
}
