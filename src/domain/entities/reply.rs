//! Reply entity and repository trait.
//!
//! Mirrors the comment aggregate, scoped to a parent comment instead of a
//! thread. Maps to the `replies` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::error::AppError;

/// Placeholder shown in place of a soft-deleted reply's content.
pub const DELETED_REPLY_PLACEHOLDER: &str = "**balasan telah dihapus**";

/// A validated new-reply payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub content: String,
}

impl NewReply {
    /// Validate a raw reply payload into a `NewReply`.
    pub fn new(content: Option<String>) -> Result<Self, AppError> {
        match content {
            Some(content) => Ok(Self { content }),
            None => Err(AppError::Validation(
                "tidak dapat membuat reply baru karena properti yang dibutuhkan tidak ada".into(),
            )),
        }
    }
}

/// A successfully created reply, as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// A reply row joined with its author's username, used by the detail view.
#[derive(Debug, Clone)]
pub struct Reply {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

impl Reply {
    /// Content as shown in the thread detail view.
    pub fn displayed_content(&self) -> String {
        if self.is_delete {
            DELETED_REPLY_PLACEHOLDER.to_string()
        } else {
            self.content.clone()
        }
    }
}

/// Repository trait for reply data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Persist a new reply under a comment.
    async fn add_reply(
        &self,
        id: &str,
        new_reply: &NewReply,
        comment_id: &str,
        owner: &str,
    ) -> Result<AddedReply, AppError>;

    /// Fail with NotFound when the reply does not exist under the comment.
    async fn verify_reply_availability(
        &self,
        reply_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError>;

    /// Fail with NotFound when the reply does not exist, Forbidden when it
    /// is owned by someone else. Existence is checked before ownership.
    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<(), AppError>;

    /// Soft-delete a reply (the row is kept, `is_delete` is set).
    async fn delete_reply(&self, reply_id: &str) -> Result<(), AppError>;

    /// Fetch all replies under a comment ordered by creation time ascending.
    async fn get_replies_by_comment_id(&self, comment_id: &str) -> Result<Vec<Reply>, AppError>;
}
