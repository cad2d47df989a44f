//! Reply Service
//!
//! Handles adding and deleting replies under a comment. The verification
//! chain walks the full ancestry: thread, then comment, then (for deletes)
//! the reply itself and its ownership.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    AddedReply, CommentRepository, NewReply, ReplyRepository, ThreadRepository,
};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

/// Reply service trait
#[async_trait]
pub trait ReplyService: Send + Sync {
    /// Add a reply to a comment
    async fn add_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
        content: Option<String>,
    ) -> Result<AddedReply, AppError>;

    /// Soft-delete a reply owned by the requesting user
    async fn delete_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> Result<(), AppError>;
}

/// ReplyService implementation
pub struct ReplyServiceImpl<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
    reply_repo: Arc<R>,
    id_generator: Arc<IdGenerator>,
}

impl<T, C, R> ReplyServiceImpl<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    pub fn new(
        thread_repo: Arc<T>,
        comment_repo: Arc<C>,
        reply_repo: Arc<R>,
        id_generator: Arc<IdGenerator>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<T, C, R> ReplyService for ReplyServiceImpl<T, C, R>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    R: ReplyRepository + 'static,
{
    async fn add_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
        content: Option<String>,
    ) -> Result<AddedReply, AppError> {
        let new_reply = NewReply::new(content)?;

        // Ancestors must exist before anything is written
        self.thread_repo.get_thread_by_id(thread_id).await?;
        self.comment_repo
            .verify_comment_availability(comment_id, thread_id)
            .await?;

        let id = self.id_generator.generate("reply");

        self.reply_repo
            .add_reply(&id, &new_reply, comment_id, owner)
            .await
    }

    async fn delete_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> Result<(), AppError> {
        // Existence checks take precedence over ownership
        self.thread_repo.get_thread_by_id(thread_id).await?;
        self.comment_repo
            .verify_comment_availability(comment_id, thread_id)
            .await?;
        self.reply_repo
            .verify_reply_availability(reply_id, comment_id)
            .await?;
        self.reply_repo.verify_reply_owner(reply_id, owner).await?;

        self.reply_repo.delete_reply(reply_id).await
    }
}
