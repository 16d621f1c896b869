//! API route configuration.

use crate::api::handlers::{
    chart_handler, domain_api_handler, domain_chart_handler, index_api_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON statistics routes.
///
/// # Endpoints
///
/// - `GET /api.json`          - Latest snapshot (all domains + total)
/// - `GET /{domain}/api.json` - One domain's latest count
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api.json", get(index_api_handler))
        .route("/{domain}/api.json", get(domain_api_handler))
}

/// SVG chart routes, rate-limited per client IP.
///
/// # Endpoints
///
/// - `GET /chart.svg`          - Totals history
/// - `GET /{domain}/chart.svg` - One domain's history overlaid on the totals
pub fn chart_routes() -> Router<AppState> {
    Router::new()
        .route("/chart.svg", get(chart_handler))
        .route("/{domain}/chart.svg", get(domain_chart_handler))
        .layer(rate_limit::layer())
}
