//! User Registration API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn test_register_rejects_missing_property() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/users",
            &json!({"username": "dicoding", "password": "secret"}).to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada"
    );
}

#[tokio::test]
async fn test_register_rejects_non_string_property() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/users",
            &json!({"username": 123, "fullname": "Dicoding Indonesia", "password": "secret"})
                .to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "tidak dapat membuat user baru karena tipe data tidak sesuai"
    );
}

#[tokio::test]
async fn test_register_rejects_username_over_limit() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/users",
            &json!({
                "username": "a".repeat(51),
                "fullname": "Dicoding Indonesia",
                "password": "secret"
            })
            .to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "tidak dapat membuat user baru karena karakter username melebihi batas limit"
    );
}

#[tokio::test]
async fn test_register_rejects_restricted_username_characters() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/users",
            &json!({
                "username": "dico ding",
                "fullname": "Dicoding Indonesia",
                "password": "secret"
            })
            .to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "tidak dapat membuat user baru karena username mengandung karakter terlarang"
    );
}

#[tokio::test]
async fn test_database_failures_are_masked_as_server_errors() {
    let app = TestApp::new();

    // valid payload; the unreachable pool turns the lookup into a server error
    let response = app
        .post_json(
            "/users",
            &json!({
                "username": "dicoding",
                "fullname": "Dicoding Indonesia",
                "password": "secret"
            })
            .to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "terjadi kegagalan pada server kami");
}
