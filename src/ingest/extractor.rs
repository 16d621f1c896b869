//! Batch extraction of dump files into the data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::dump::{IngestError, parse_dump};
use crate::utils::dump_names;
use flate2::read::GzDecoder;
use tracing::{debug, info};

/// Outcome of one extraction run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Snapshot files written this run.
    pub written: usize,
    /// Dumps skipped because their snapshot already existed.
    pub skipped: usize,
}

/// Walks the dump directory and writes one snapshot file per dump.
///
/// Dumps are processed in ascending name order. A dump whose snapshot file
/// already exists is skipped unless `force` is set, so the cron job only
/// pays for the newest dump on a normal day.
pub struct Extractor {
    dumps_dir: PathBuf,
    data_dir: PathBuf,
}

impl Extractor {
    pub fn new(dumps_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            dumps_dir: dumps_dir.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Extracts every pending dump.
    ///
    /// # Errors
    ///
    /// Fails on the first dump that cannot be read or written; snapshots
    /// written before the failure are kept.
    pub fn run(&self, force: bool) -> Result<ExtractReport, IngestError> {
        fs::create_dir_all(&self.data_dir)?;

        let mut report = ExtractReport::default();
        for dump in self.find_dumps()? {
            if self.extract_one(&dump, force)? {
                report.written += 1;
            } else {
                report.skipped += 1;
            }
        }

        Ok(report)
    }

    /// Lists dump files in ascending name order.
    ///
    /// Only files matching the `shorturls-YYYYMMDD.gz` naming scheme are
    /// considered; the dump directory also carries checksum files.
    fn find_dumps(&self) -> Result<Vec<PathBuf>, IngestError> {
        let mut dumps: Vec<PathBuf> = fs::read_dir(&self.dumps_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .and_then(dump_names::dump_date)
                    .is_some()
            })
            .collect();
        dumps.sort();
        Ok(dumps)
    }

    /// Extracts a single dump; returns `false` when it was skipped.
    fn extract_one(&self, dump: &Path, force: bool) -> Result<bool, IngestError> {
        let file_name = dump
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| IngestError::BadDumpName(dump.display().to_string()))?;

        let target = self.data_dir.join(dump_names::data_file_for_dump(file_name));
        if target.exists() && !force {
            debug!("Skipping {}, snapshot exists", file_name);
            return Ok(false);
        }

        let gz = GzDecoder::new(fs::File::open(dump)?);
        let snapshot = parse_dump(io::BufReader::new(gz))?;

        serde_json::to_writer(fs::File::create(&target)?, &snapshot)?;
        info!(
            "Wrote {} ({} domains, {} total)",
            target.display(),
            snapshot.stats.len(),
            snapshot.total
        );
        metrics::counter!("dumps_extracted_total").increment(1);

        Ok(true)
    }
}
