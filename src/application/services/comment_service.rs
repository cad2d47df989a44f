//! Comment Service
//!
//! Handles adding and deleting comments under a thread. Mutations run a
//! fixed verification chain: ancestor existence before ownership, so a
//! missing resource always reports NotFound even to a non-owner.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{AddedComment, CommentRepository, NewComment, ThreadRepository};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

/// Comment service trait
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Add a comment to a thread
    async fn add_comment(
        &self,
        thread_id: &str,
        owner: &str,
        content: Option<String>,
    ) -> Result<AddedComment, AppError>;

    /// Soft-delete a comment owned by the requesting user
    async fn delete_comment(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), AppError>;
}

/// CommentService implementation
pub struct CommentServiceImpl<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
    id_generator: Arc<IdGenerator>,
}

impl<T, C> CommentServiceImpl<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    pub fn new(thread_repo: Arc<T>, comment_repo: Arc<C>, id_generator: Arc<IdGenerator>) -> Self {
        Self {
            thread_repo,
            comment_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<T, C> CommentService for CommentServiceImpl<T, C>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
{
    async fn add_comment(
        &self,
        thread_id: &str,
        owner: &str,
        content: Option<String>,
    ) -> Result<AddedComment, AppError> {
        let new_comment = NewComment::new(content)?;

        // Thread must exist before anything is written
        self.thread_repo.get_thread_by_id(thread_id).await?;

        let id = self.id_generator.generate("comment");

        self.comment_repo
            .add_comment(&id, &new_comment, thread_id, owner)
            .await
    }

    async fn delete_comment(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), AppError> {
        // Existence checks take precedence over ownership
        self.thread_repo.get_thread_by_id(thread_id).await?;
        self.comment_repo
            .verify_comment_availability(comment_id, thread_id)
            .await?;
        self.comment_repo
            .verify_comment_owner(comment_id, owner)
            .await?;

        self.comment_repo.delete_comment(comment_id).await
    }
}
