//! Request DTOs
//!
//! Data structures for API request bodies. Fields are optional so that
//! missing-property validation happens in the domain constructors with the
//! proper message, rather than failing opaquely at deserialization.

use serde::Deserialize;

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub username: Option<String>,
    pub fullname: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Refresh/logout request carrying the refresh token
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}

/// Create thread request
#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Create comment request
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
}

/// Create reply request
#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    pub content: Option<String>,
}
