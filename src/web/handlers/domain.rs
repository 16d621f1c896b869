//! Per-domain page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use super::error::error_response;
use crate::state::AppState;
use crate::web::filters;

/// Template for a domain page (e.g. `/query.wikidata.org`).
#[derive(Template, WebTemplate)]
#[template(path = "domain.html")]
pub struct DomainTemplate {
    pub domain: String,
    pub count: i64,
}

/// Renders the page for a single destination domain.
///
/// # Endpoint
///
/// `GET /{domain}`
///
/// Unknown domains render the error page with a 404 status.
pub async fn domain_handler(State(state): State<AppState>, Path(domain): Path<String>) -> Response {
    match state.stats.domain(&domain).await {
        Ok(entry) => DomainTemplate {
            domain: entry.domain,
            count: entry.count,
        }
        .into_response(),
        Err(err) => error_response(err),
    }
}
