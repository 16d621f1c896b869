use std::sync::Arc;

use crate::application::services::{ChartService, StatsService};
use crate::infrastructure::cache::CacheService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<StatsService>,
    pub charts: Arc<ChartService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        stats: Arc<StatsService>,
        charts: Arc<ChartService>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            stats,
            charts,
            cache,
        }
    }
}
