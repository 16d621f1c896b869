//! Utility functions shared by the extractor and the snapshot store.
//!
//! - [`dump_names`] - Dump and data file naming and date parsing

pub mod dump_names;
