//! Business logic services.

pub mod chart_service;
pub mod stats_service;

pub use chart_service::ChartService;
pub use stats_service::StatsService;
