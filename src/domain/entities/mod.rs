//! Core data structures.

mod snapshot;

pub use snapshot::{DomainCount, Snapshot};
