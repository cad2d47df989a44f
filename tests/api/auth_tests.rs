//! Authentication API Tests
//!
//! Exercises bearer-token enforcement and authentication payload
//! validation through the full router.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn test_protected_routes_reject_missing_token() {
    let app = TestApp::new();

    let protected = [
        ("POST", "/threads", json!({"title": "t", "body": "b"})),
        (
            "POST",
            "/threads/thread-123/comments",
            json!({"content": "c"}),
        ),
        ("DELETE", "/threads/thread-123/comments/comment-123", json!({})),
        (
            "POST",
            "/threads/thread-123/comments/comment-123/replies",
            json!({"content": "r"}),
        ),
        (
            "DELETE",
            "/threads/thread-123/comments/comment-123/replies/reply-123",
            json!({}),
        ),
        (
            "PUT",
            "/threads/thread-123/comments/comment-123/likes",
            json!({}),
        ),
    ];

    for (method, uri, body) in protected {
        let response = app
            .request_json(method, uri, &body.to_string(), None)
            .await;

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{} {} should require authentication",
            method,
            uri
        );

        let body = response_json(response).await;
        assert_eq!(body["status"], "fail");
    }
}

#[tokio::test]
async fn test_protected_route_rejects_malformed_bearer_token() {
    let app = TestApp::new();

    let response = app
        .request_json(
            "POST",
            "/threads",
            &json!({"title": "t", "body": "b"}).to_string(),
            Some("not-a-jwt"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_rejects_missing_credentials() {
    let app = TestApp::new();

    let response = app
        .post_json("/authentications", &json!({"username": "dicoding"}).to_string())
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "harus mengirimkan username dan password");
}

#[tokio::test]
async fn test_login_rejects_non_string_credentials() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/authentications",
            &json!({"username": "dicoding", "password": 123}).to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "username dan password harus string");
}

#[tokio::test]
async fn test_refresh_rejects_missing_token() {
    let app = TestApp::new();

    let response = app
        .request_json("PUT", "/authentications", &json!({}).to_string(), None)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "harus mengirimkan token refresh");
}

#[tokio::test]
async fn test_refresh_rejects_invalid_token_signature() {
    let app = TestApp::new();

    let response = app
        .request_json(
            "PUT",
            "/authentications",
            &json!({"refreshToken": "definitely-not-a-jwt"}).to_string(),
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "refresh token tidak valid");
}

#[tokio::test]
async fn test_logout_rejects_missing_token() {
    let app = TestApp::new();

    let response = app
        .request_json("DELETE", "/authentications", &json!({}).to_string(), None)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "harus mengirimkan token refresh");
}
