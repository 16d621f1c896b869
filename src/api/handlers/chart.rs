//! Handlers for the SVG chart endpoints.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Serves the totals history chart.
///
/// # Endpoint
///
/// `GET /chart.svg`
pub async fn chart_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let svg = state.charts.totals_chart().await?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// Serves the history chart for one domain, overlaid on the totals.
///
/// # Endpoint
///
/// `GET /{domain}/chart.svg`
pub async fn domain_chart_handler(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let svg = state.charts.domain_chart(&domain).await?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
