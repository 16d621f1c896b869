//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository and
//! cache calls. Services consume the domain traits and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::stats_service::StatsService`] - Snapshot reads and per-domain lookups
//! - [`services::chart_service::ChartService`] - SVG history charts

pub mod services;
