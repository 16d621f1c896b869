//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET /`                   - Index page (HTML)
//! - `GET /{domain}`           - Per-domain page (HTML)
//! - `GET /api.json`           - Latest snapshot (JSON)
//! - `GET /{domain}/api.json`  - One domain's count (JSON)
//! - `GET /chart.svg`          - Totals history (SVG, rate-limited)
//! - `GET /{domain}/chart.svg` - Per-domain history (SVG, rate-limited)
//! - `GET /healthz`            - Health check
//! - `/static/*`               - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the chart routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/healthz", get(health_handler))
        .merge(web::routes::page_routes())
        .merge(api::routes::api_routes())
        .merge(api::routes::chart_routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
