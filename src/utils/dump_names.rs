//! Dump and data file naming.
//!
//! Wikimedia publishes one dump per day named `shorturls-YYYYMMDD.gz`. The
//! extractor writes the matching snapshot as `shorturls-YYYYMMDD.gz.data`,
//! so a snapshot file name is always the dump file name plus a `.data`
//! suffix and the date can be recovered from either.

use chrono::NaiveDate;

const DUMP_FORMAT: &str = "shorturls-%Y%m%d.gz";
const DATA_FORMAT: &str = "shorturls-%Y%m%d.gz.data";

/// Parses the date out of a dump file name (`shorturls-20200105.gz`).
pub fn dump_date(file_name: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(file_name, DUMP_FORMAT).ok()
}

/// Parses the date out of a snapshot file name (`shorturls-20200105.gz.data`).
pub fn data_date(file_name: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(file_name, DATA_FORMAT).ok()
}

/// Snapshot file name for a date.
pub fn data_file_name(date: NaiveDate) -> String {
    date.format(DATA_FORMAT).to_string()
}

/// Snapshot file name for a dump file name.
pub fn data_file_for_dump(dump_file_name: &str) -> String {
    format!("{dump_file_name}.data")
}
