//! Thread/Comment/Reply API Tests
//!
//! Payload validation through the full router with a valid access token.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn test_add_thread_rejects_missing_property() {
    let app = TestApp::new();
    let token = app.access_token("user-123", "dicoding");

    let response = app
        .post_json_auth("/threads", &json!({"title": "dicoding thread"}).to_string(), &token)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
    );
}

#[tokio::test]
async fn test_add_thread_rejects_non_string_property() {
    let app = TestApp::new();
    let token = app.access_token("user-123", "dicoding");

    let response = app
        .post_json_auth(
            "/threads",
            &json!({"title": "dicoding thread", "body": 123}).to_string(),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "tidak dapat membuat thread baru karena tipe data tidak sesuai"
    );
}

#[tokio::test]
async fn test_add_comment_rejects_missing_property() {
    let app = TestApp::new();
    let token = app.access_token("user-123", "dicoding");

    let response = app
        .post_json_auth(
            "/threads/thread-123/comments",
            &json!({"title": "not content"}).to_string(),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada"
    );
}

#[tokio::test]
async fn test_add_comment_rejects_non_string_content() {
    let app = TestApp::new();
    let token = app.access_token("user-123", "dicoding");

    let response = app
        .post_json_auth(
            "/threads/thread-123/comments",
            &json!({"content": 123}).to_string(),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "tidak dapat membuat comment baru karena tipe data tidak sesuai"
    );
}

#[tokio::test]
async fn test_add_reply_rejects_missing_property() {
    let app = TestApp::new();
    let token = app.access_token("user-123", "dicoding");

    let response = app
        .post_json_auth(
            "/threads/thread-123/comments/comment-123/replies",
            &json!({}).to_string(),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "tidak dapat membuat reply baru karena properti yang dibutuhkan tidak ada"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/unknown").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}
