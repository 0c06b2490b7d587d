//! Router-level tests for authentication enforcement.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn protected_route_without_token_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/projects", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Missing Authorization header");
    assert_eq!(response.body["code"], "AUTHENTICATION");
}

#[tokio::test]
async fn malformed_authorization_header_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/projects", None, Some("not-a-bearer"))
        .await;

    // The helper prefixes "Bearer ", so sneak a bad header in directly.
    let request = http::Request::builder()
        .method("GET")
        .uri("/api/projects")
        .header("authorization", "Token abc123")
        .body(axum::body::Body::empty())
        .unwrap();
    let direct = app.send(request).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(direct.status, StatusCode::UNAUTHORIZED);
    assert_eq!(direct.body["error"], "Invalid Authorization header format");
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/projects", None, Some("e30.e30.e30"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid token");
}

#[tokio::test]
async fn signup_limiter_keys_on_client_address() {
    let app = helpers::TestApp::new().await;
    // Short username stops each attempt at validation, so only the
    // limiter and the DTO are exercised.
    let body = serde_json::json!({
        "username": "ab",
        "email": "tester@example.com",
        "password": "hunter2",
    });

    // Direct connections are keyed on the peer socket address.
    for _ in 0..5 {
        let response = app
            .request("POST", "/api/auth/signup", Some(body.clone()), None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["code"], "VALIDATION");
    }

    let exhausted = app
        .request("POST", "/api/auth/signup", Some(body.clone()), None)
        .await;
    assert_eq!(exhausted.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(exhausted.body["code"], "RATE_LIMIT");

    // A forwarded client lands in its own bucket.
    let request = http::Request::builder()
        .method("POST")
        .uri("/api/auth/signup")
        .header("content-type", "application/json")
        .header("x-forwarded-for", "10.0.0.9")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap();
    let forwarded = app.send(request).await;
    assert_eq!(forwarded.status, StatusCode::BAD_REQUEST);
    assert_eq!(forwarded.body["code"], "VALIDATION");
}

#[tokio::test]
async fn valid_token_passes_the_extractor() {
    let app = helpers::TestApp::new().await;
    let token = app.token();

    // A storage-only route proves the token was accepted.
    let project_id = uuid::Uuid::new_v4();
    let response = app
        .request(
            "GET",
            &format!("/api/projects/{project_id}/files"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["files"], serde_json::json!([]));
}
