//! Aggregate usage counts for one dump.

use serde::{Deserialize, Serialize};

/// Number of short links resolving to one destination hostname.
///
/// This struct is the record format of the snapshot data files as well as the
/// payload handed to the API and the domain page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: i64,
}

/// One day's aggregate statistics, parsed from a single dump.
///
/// `stats` is ordered by count descending; `total` is the sum of all counts.
/// Producers (the extractor) enforce both, consumers assume them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub stats: Vec<DomainCount>,
    pub total: i64,
}

impl Snapshot {
    /// Looks up the count for a single hostname.
    pub fn count_for(&self, domain: &str) -> Option<i64> {
        self.stats
            .iter()
            .find(|entry| entry.domain == domain)
            .map(|entry| entry.count)
    }
}
