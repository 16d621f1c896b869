//! Handlers for the JSON statistics endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::{DomainStat, IndexResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the latest snapshot as JSON.
///
/// # Endpoint
///
/// `GET /api.json`
///
/// # Errors
///
/// Returns 404 Not Found when no data has been extracted yet.
pub async fn index_api_handler(
    State(state): State<AppState>,
) -> Result<Json<IndexResponse>, AppError> {
    let snapshot = state.stats.latest().await?;
    Ok(Json(IndexResponse::from(snapshot)))
}

/// Returns one domain's latest count as JSON.
///
/// # Endpoint
///
/// `GET /{domain}/api.json`
///
/// # Errors
///
/// Returns 404 Not Found when the domain does not appear in the latest
/// snapshot.
pub async fn domain_api_handler(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<DomainStat>, AppError> {
    let entry = state.stats.domain(&domain).await?;
    Ok(Json(DomainStat::from(entry)))
}
