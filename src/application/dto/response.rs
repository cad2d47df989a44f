//! Response DTOs
//!
//! The `{status, message?, data?}` success envelope and the data shapes for
//! each endpoint, all serialized in camelCase.

use serde::Serialize;

use crate::domain::{AddedComment, AddedReply, AddedThread, RegisteredUser};

/// Success response envelope.
///
/// Failures never pass through here; they are shaped by the error
/// translation in `shared::error`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Envelope for a successful response carrying data.
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope for a successful response without data.
    pub fn success_empty() -> Self {
        Self {
            status: "success",
            message: None,
            data: None,
        }
    }
}

/// Data wrapper for POST /users
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedUserData {
    pub added_user: RegisteredUser,
}

/// Data wrapper for POST /authentications
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginTokensData {
    pub access_token: String,
    pub refresh_token: String,
}

/// Data wrapper for PUT /authentications
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenData {
    pub access_token: String,
}

/// Data wrapper for POST /threads
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedThread,
}

/// Data wrapper for POST .../comments
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedComment,
}

/// Data wrapper for POST .../replies
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyData {
    pub added_reply: AddedReply,
}

/// Data wrapper for GET /threads/{id}
#[derive(Debug, Serialize)]
pub struct ThreadDetailData {
    pub thread: ThreadDetail,
}

/// Thread detail with nested comments, replies and like counts.
#[derive(Debug, Serialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

/// A comment in the thread detail view.
///
/// Soft-deleted comments appear with placeholder content, keeping their
/// position and count in the sequence.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub like_count: i64,
    pub replies: Vec<ReplyDetail>,
}

/// A reply in the thread detail view.
#[derive(Debug, Serialize)]
pub struct ReplyDetail {
    pub id: String,
    pub content: String,
    pub date: String,
    pub username: String,
}
