//! DTOs for the statistics endpoints.
//!
//! The wire format mirrors the snapshot data files: the index response is
//! `{ "stats": [{ "domain", "count" }, ...], "total" }`.

use crate::domain::entities::{DomainCount, Snapshot};
use serde::Serialize;

/// Response for `GET /api.json`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub stats: Vec<DomainStat>,
    pub total: i64,
}

/// One domain's entry, also the response for `GET /{domain}/api.json`.
#[derive(Debug, Serialize)]
pub struct DomainStat {
    pub domain: String,
    pub count: i64,
}

impl From<DomainCount> for DomainStat {
    fn from(entry: DomainCount) -> Self {
        Self {
            domain: entry.domain,
            count: entry.count,
        }
    }
}

impl From<Snapshot> for IndexResponse {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            stats: snapshot.stats.into_iter().map(DomainStat::from).collect(),
            total: snapshot.total,
        }
    }
}
