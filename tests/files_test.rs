//! Router-level tests for project file content endpoints.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn create_file_writes_to_disk() {
    let app = helpers::TestApp::new().await;
    let token = app.token();
    let project_id = Uuid::new_v4();

    let response = app
        .request(
            "POST",
            &format!("/api/projects/{project_id}/create-file"),
            Some(json!({"filePath": "notes/todo.md", "content": "x"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["filePath"], "notes/todo.md");

    let on_disk = app
        .data_dir
        .path()
        .join("uploads")
        .join(project_id.to_string())
        .join("notes")
        .join("todo.md");
    assert_eq!(std::fs::read_to_string(on_disk).unwrap(), "x");
}

#[tokio::test]
async fn create_file_rejects_traversal_paths() {
    let app = helpers::TestApp::new().await;
    let token = app.token();
    let project_id = Uuid::new_v4();

    let response = app
        .request(
            "POST",
            &format!("/api/projects/{project_id}/create-file"),
            Some(json!({"filePath": "../escape.txt", "content": "x"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION");
}

#[tokio::test]
async fn create_folder_rejects_separators_before_touching_records() {
    let app = helpers::TestApp::new().await;
    let token = app.token();
    let project_id = Uuid::new_v4();

    for target in ["main", "branch"] {
        let response = app
            .request(
                "POST",
                &format!("/api/projects/{project_id}/folders"),
                Some(json!({"folderName": "a/b", "targetType": target})),
                Some(&token),
            )
            .await;

        // Rejected up front; the unreachable pool would answer with a
        // DATABASE error if the name got as far as the metadata store.
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["code"], "VALIDATION");
    }
}

#[tokio::test]
async fn upload_folder_then_list_returns_the_tree() {
    let app = helpers::TestApp::new().await;
    let token = app.token();
    let project_id = Uuid::new_v4();

    let boundary = "hive-test-boundary";
    let (content_type, body) = helpers::multipart_body(
        boundary,
        &[("a/b.txt", "hello"), ("a/c.txt", "!")],
    );

    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/projects/{project_id}/upload-folder"))
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 2);

    let listing = app
        .request(
            "GET",
            &format!("/api/projects/{project_id}/files"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(listing.status, StatusCode::OK);
    let files = listing.body["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["name"], "a");
    assert_eq!(files[0]["type"], "folder");

    let children = files[0]["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["name"], "b.txt");
    assert_eq!(children[0]["type"], "file");
    assert_eq!(children[0]["size"], 5);
    assert_eq!(children[1]["name"], "c.txt");
}

#[tokio::test]
async fn empty_upload_is_a_validation_error() {
    let app = helpers::TestApp::new().await;
    let token = app.token();
    let project_id = Uuid::new_v4();

    let boundary = "hive-test-boundary";
    let (content_type, body) = helpers::multipart_body(boundary, &[]);

    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/projects/{project_id}/upload-folder"))
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "No files uploaded");
}

#[tokio::test]
async fn listing_untouched_project_is_empty() {
    let app = helpers::TestApp::new().await;
    let token = app.token();

    let response = app
        .request(
            "GET",
            &format!("/api/projects/{}/files", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["files"], json!([]));
}
