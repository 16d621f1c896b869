//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{domain_handler, index_handler};
use axum::{Router, routing::get};

/// Public HTML pages.
///
/// # Endpoints
///
/// - `GET /`         - Index page with all domains
/// - `GET /{domain}` - Page for one destination domain
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/{domain}", get(domain_handler))
}
