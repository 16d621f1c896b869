//! Dump file parsing.

use std::collections::HashMap;
use std::io::BufRead;

use crate::domain::entities::{DomainCount, Snapshot};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Errors from dump ingestion.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unrecognized dump file name: {0}")]
    BadDumpName(String),
}

/// Parses one dump into a snapshot.
///
/// A dump is plain text with one short link per line, `code|url`. Records
/// are counted per destination hostname. Lines without a separator, URLs
/// that fail to parse, and URLs without a host are skipped; the upstream
/// shortener validates URLs but such records still show up in practice.
///
/// The returned snapshot is sorted by count descending (ties broken by
/// hostname, for stable output) with the grand total filled in.
pub fn parse_dump<R: BufRead>(reader: R) -> Result<Snapshot, IngestError> {
    let mut counts: HashMap<String, i64> = HashMap::new();

    for line in reader.lines() {
        let line = line?;

        let Some((_code, target)) = line.split_once('|') else {
            debug!("Skipping dump line without separator");
            continue;
        };

        let Ok(parsed) = Url::parse(target) else {
            debug!("Skipping unparseable target URL");
            continue;
        };

        let Some(host) = parsed.host_str() else {
            continue;
        };

        *counts.entry(host.to_string()).or_insert(0) += 1;
    }

    let mut stats: Vec<DomainCount> = counts
        .into_iter()
        .map(|(domain, count)| DomainCount { domain, count })
        .collect();

    let total = stats.iter().map(|entry| entry.count).sum();

    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));

    Ok(Snapshot { stats, total })
}
