mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortstats::api::handlers::health_handler;

fn app(state: shortstats::AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _dir) = common::seeded_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/healthz").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["snapshots"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (state, _dir) = common::seeded_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/healthz").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("snapshots").is_some());
    assert!(json["checks"].get("cache").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded_without_data() {
    let (state, _dir) = common::empty_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/healthz").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["snapshots"]["status"], "error");
}
