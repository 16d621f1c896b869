mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortstats::domain::entities::{DomainCount, Snapshot};
use shortstats::web::handlers::{domain_handler, index_handler};

fn app(state: shortstats::AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/{domain}", get(domain_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_index_page_renders_totals_and_rows() {
    let (state, _dir) = common::seeded_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    // Grand total, comma-formatted.
    assert!(html.contains("1,234"));
    // Ranked rows with links to the domain pages.
    assert!(html.contains("<a href=\"/en.wikipedia.org\">en.wikipedia.org</a>"));
    assert!(html.contains("1,200"));
    assert!(html.contains("www.wikidata.org"));
    // Chart reference.
    assert!(html.contains("src=\"/chart.svg\""));
}

#[tokio::test]
async fn test_index_page_renders_single_row_count() {
    let dir = tempfile::tempdir().unwrap();
    common::write_snapshot(
        dir.path(),
        "shorturls-20200105.gz.data",
        &Snapshot {
            stats: vec![DomainCount {
                domain: "a.org".to_string(),
                count: 5,
            }],
            total: 5,
        },
    );
    let server = TestServer::new(app(common::create_test_state(dir.path()))).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("<a href=\"/a.org\">a.org</a>"));
    assert!(html.contains("<td>5</td>"));
}

#[tokio::test]
async fn test_domain_page_renders_count() {
    let (state, _dir) = common::seeded_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/www.wikidata.org").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("<h1>www.wikidata.org</h1>"));
    assert!(html.contains("34"));
    assert!(html.contains("src=\"/www.wikidata.org/chart.svg\""));
}

#[tokio::test]
async fn test_unknown_domain_renders_error_page() {
    let (state, _dir) = common::seeded_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/example.com").await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let html = response.text();
    assert!(html.contains("Unknown domain specified"));
}

#[tokio::test]
async fn test_index_page_without_data_renders_error_page() {
    let (state, _dir) = common::empty_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    assert!(response.text().contains("No statistics extracted yet"));
}
