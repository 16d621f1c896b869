//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Snapshots**: At least one extracted data file is readable
/// 2. **Cache**: Redis PING (NullCache always reports healthy)
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let snapshots_check = check_snapshots(&state).await;

    let cache_check = check_cache(&state).await;

    let all_healthy = snapshots_check.status == "ok" && cache_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            snapshots: snapshots_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that extracted data exists by querying the latest snapshot date.
async fn check_snapshots(state: &AppState) -> CheckStatus {
    match state.stats.latest_date().await {
        Ok(Some(date)) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Latest snapshot: {}", date)),
        },
        Ok(None) => CheckStatus {
            status: "error".to_string(),
            message: Some("No snapshots extracted yet".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Data directory error: {}", e.message())),
        },
    }
}

/// Checks cache connectivity via PING command.
async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Redis connection failed".to_string()),
        }
    }
}
