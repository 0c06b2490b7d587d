//! Router-level tests for the health endpoint.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn health_reports_ok() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/nope", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
