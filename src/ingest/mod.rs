//! Dump ingestion: turning raw dump files into snapshot data files.
//!
//! Wikimedia publishes a gzipped dump of all short links once a day. The
//! [`Extractor`] (driven by the `extract_data` cron binary) parses each dump
//! it hasn't seen yet into a [`crate::domain::entities::Snapshot`] and writes
//! it to the data directory the web server reads from.

mod dump;
mod extractor;

pub use dump::{IngestError, parse_dump};
pub use extractor::{ExtractReport, Extractor};
