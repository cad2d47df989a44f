//! Comment entity and repository trait.
//!
//! Maps to the `comments` table. Comments belong to exactly one thread and
//! are soft-deleted: the row stays, `is_delete` flips, and the detail view
//! shows a placeholder instead of the content.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::error::AppError;

/// Placeholder shown in place of a soft-deleted comment's content.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// A validated new-comment payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    /// Validate a raw comment payload into a `NewComment`.
    pub fn new(content: Option<String>) -> Result<Self, AppError> {
        match content {
            Some(content) => Ok(Self { content }),
            None => Err(AppError::Validation(
                "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada"
                    .into(),
            )),
        }
    }
}

/// A successfully created comment, as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// A comment row joined with its author's username, used by the detail view.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

impl Comment {
    /// Content as shown in the thread detail view.
    ///
    /// Soft-deleted comments keep their position and count but display a
    /// placeholder instead of the original content.
    pub fn displayed_content(&self) -> String {
        if self.is_delete {
            DELETED_COMMENT_PLACEHOLDER.to_string()
        } else {
            self.content.clone()
        }
    }
}

/// Repository trait for comment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment under a thread.
    async fn add_comment(
        &self,
        id: &str,
        new_comment: &NewComment,
        thread_id: &str,
        owner: &str,
    ) -> Result<AddedComment, AppError>;

    /// Fail with NotFound when the comment does not exist in the thread.
    async fn verify_comment_availability(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<(), AppError>;

    /// Fail with NotFound when the comment does not exist, Forbidden when it
    /// is owned by someone else. Existence is checked before ownership.
    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<(), AppError>;

    /// Soft-delete a comment (the row is kept, `is_delete` is set).
    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError>;

    /// Fetch all comments in a thread ordered by creation time ascending.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_accepts_valid_payload() {
        let comment = NewComment::new(Some("dicoding comment".into())).unwrap();

        assert_eq!(comment.content, "dicoding comment");
    }

    #[test]
    fn test_new_comment_rejects_missing_content() {
        let result = NewComment::new(None);

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(
                msg,
                "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada"
            ),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_displayed_content_for_live_comment() {
        let comment = Comment {
            id: "comment-123".into(),
            username: "dicoding".into(),
            date: Utc::now(),
            content: "sebuah comment".into(),
            is_delete: false,
        };

        assert_eq!(comment.displayed_content(), "sebuah comment");
    }

    #[test]
    fn test_displayed_content_for_deleted_comment() {
        let comment = Comment {
            id: "comment-123".into(),
            username: "dicoding".into(),
            date: Utc::now(),
            content: "sebuah comment".into(),
            is_delete: true,
        };

        assert_eq!(comment.displayed_content(), "**komentar telah dihapus**");
    }
}
