//! Index page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use super::error::error_response;
use crate::domain::entities::DomainCount;
use crate::state::AppState;
use crate::web::filters;

/// Template for the index page.
///
/// Renders `templates/index.html` with the grand total, the totals chart,
/// and a ranked table of every destination domain.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub total: i64,
    pub stats: Vec<DomainCount>,
}

/// Renders the index page from the latest snapshot.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> Response {
    match state.stats.latest().await {
        Ok(snapshot) => IndexTemplate {
            total: snapshot.total,
            stats: snapshot.stats,
        }
        .into_response(),
        Err(err) => error_response(err),
    }
}
