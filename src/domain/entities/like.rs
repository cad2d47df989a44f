//! Comment-like repository trait.
//!
//! Maps to the `likes` table: one row per (comment, user) pair, toggled on
//! and off. There is no like entity to validate; the aggregate is the
//! association itself.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// Repository trait for comment-like data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Whether the user currently likes the comment.
    async fn has_user_liked(&self, comment_id: &str, owner: &str) -> Result<bool, AppError>;

    /// Persist a like row for the (comment, user) pair.
    async fn add_like(&self, id: &str, comment_id: &str, owner: &str) -> Result<(), AppError>;

    /// Remove the like row for the (comment, user) pair.
    async fn delete_like(&self, comment_id: &str, owner: &str) -> Result<(), AppError>;

    /// Count likes on a comment, for the thread detail view.
    async fn count_likes_by_comment_id(&self, comment_id: &str) -> Result<i64, AppError>;
}
