//! Like Service
//!
//! Toggles a user's like on a comment: present rows are removed, absent
//! rows are inserted. The toggle is deliberately non-idempotent; retried
//! requests flip the state again.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CommentRepository, LikeRepository, ThreadRepository};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

/// Like service trait
#[async_trait]
pub trait LikeService: Send + Sync {
    /// Toggle the requesting user's like on a comment
    async fn toggle_like(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), AppError>;
}

/// LikeService implementation
pub struct LikeServiceImpl<T, C, L>
where
    T: ThreadRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
    like_repo: Arc<L>,
    id_generator: Arc<IdGenerator>,
}

impl<T, C, L> LikeServiceImpl<T, C, L>
where
    T: ThreadRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    pub fn new(
        thread_repo: Arc<T>,
        comment_repo: Arc<C>,
        like_repo: Arc<L>,
        id_generator: Arc<IdGenerator>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            like_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<T, C, L> LikeService for LikeServiceImpl<T, C, L>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    L: LikeRepository + 'static,
{
    async fn toggle_like(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), AppError> {
        // Ancestors must exist before the toggle
        self.thread_repo.get_thread_by_id(thread_id).await?;
        self.comment_repo
            .verify_comment_availability(comment_id, thread_id)
            .await?;

        if self.like_repo.has_user_liked(comment_id, owner).await? {
            self.like_repo.delete_like(comment_id, owner).await
        } else {
            let id = self.id_generator.generate("like");
            self.like_repo.add_like(&id, comment_id, owner).await
        }
    }
}
