//! Thread Service
//!
//! Handles thread creation and the thread detail view, which nests
//! comments, replies, and like counts.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::response::{CommentDetail, ReplyDetail, ThreadDetail};
use crate::domain::{
    AddedThread, CommentRepository, LikeRepository, NewThread, ReplyRepository, ThreadRepository,
};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

/// Thread service trait
#[async_trait]
pub trait ThreadService: Send + Sync {
    /// Create a thread owned by the authenticated user
    async fn add_thread(
        &self,
        title: Option<String>,
        body: Option<String>,
        owner_id: &str,
        owner_username: &str,
    ) -> Result<AddedThread, AppError>;

    /// Assemble the detail view of a thread
    async fn get_thread_detail(&self, thread_id: &str) -> Result<ThreadDetail, AppError>;
}

/// ThreadService implementation
pub struct ThreadServiceImpl<T, C, R, L>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
    L: LikeRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
    reply_repo: Arc<R>,
    like_repo: Arc<L>,
    id_generator: Arc<IdGenerator>,
}

impl<T, C, R, L> ThreadServiceImpl<T, C, R, L>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
    L: LikeRepository,
{
    pub fn new(
        thread_repo: Arc<T>,
        comment_repo: Arc<C>,
        reply_repo: Arc<R>,
        like_repo: Arc<L>,
        id_generator: Arc<IdGenerator>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
            like_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<T, C, R, L> ThreadService for ThreadServiceImpl<T, C, R, L>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    R: ReplyRepository + 'static,
    L: LikeRepository + 'static,
{
    async fn add_thread(
        &self,
        title: Option<String>,
        body: Option<String>,
        owner_id: &str,
        owner_username: &str,
    ) -> Result<AddedThread, AppError> {
        let new_thread = NewThread::new(title, body)?;

        let id = self.id_generator.generate("thread");

        self.thread_repo
            .add_thread(&id, &new_thread, owner_id, owner_username)
            .await
    }

    async fn get_thread_detail(&self, thread_id: &str) -> Result<ThreadDetail, AppError> {
        // Thread existence first; a missing thread short-circuits the view
        let thread = self.thread_repo.get_thread_by_id(thread_id).await?;

        let comments = self
            .comment_repo
            .get_comments_by_thread_id(thread_id)
            .await?;

        let mut comment_details = Vec::with_capacity(comments.len());
        for comment in comments {
            let replies = self
                .reply_repo
                .get_replies_by_comment_id(&comment.id)
                .await?;
            let like_count = self.like_repo.count_likes_by_comment_id(&comment.id).await?;

            let content = comment.displayed_content();
            comment_details.push(CommentDetail {
                id: comment.id,
                username: comment.username,
                date: comment.date.to_rfc3339(),
                content,
                like_count,
                replies: replies
                    .into_iter()
                    .map(|reply| {
                        let content = reply.displayed_content();
                        ReplyDetail {
                            id: reply.id,
                            content,
                            date: reply.date.to_rfc3339(),
                            username: reply.username,
                        }
                    })
                    .collect(),
            });
        }

        Ok(ThreadDetail {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date.to_rfc3339(),
            username: thread.username,
            comments: comment_details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    use crate::domain::{
        Comment, MockCommentRepository, MockLikeRepository, MockReplyRepository,
        MockThreadRepository, Reply, Thread,
    };

    fn service(
        thread_repo: MockThreadRepository,
        comment_repo: MockCommentRepository,
        reply_repo: MockReplyRepository,
        like_repo: MockLikeRepository,
    ) -> ThreadServiceImpl<
        MockThreadRepository,
        MockCommentRepository,
        MockReplyRepository,
        MockLikeRepository,
    > {
        ThreadServiceImpl::new(
            Arc::new(thread_repo),
            Arc::new(comment_repo),
            Arc::new(reply_repo),
            Arc::new(like_repo),
            Arc::new(IdGenerator::new()),
        )
    }

    #[tokio::test]
    async fn test_add_thread_generates_prefixed_id() {
        let mut thread_repo = MockThreadRepository::new();

        thread_repo
            .expect_add_thread()
            .withf(|id, new_thread, owner_id, owner_username| {
                id.starts_with("thread-")
                    && new_thread.title == "dicoding thread"
                    && owner_id == "user-123"
                    && owner_username == "dicoding"
            })
            .times(1)
            .returning(|id, new_thread, owner_id, _| {
                Ok(AddedThread {
                    id: id.to_string(),
                    title: new_thread.title.clone(),
                    owner: owner_id.to_string(),
                })
            });

        let added = service(
            thread_repo,
            MockCommentRepository::new(),
            MockReplyRepository::new(),
            MockLikeRepository::new(),
        )
        .add_thread(
            Some("dicoding thread".into()),
            Some("Dicoding Indonesia".into()),
            "user-123",
            "dicoding",
        )
        .await
        .unwrap();

        assert!(added.id.starts_with("thread-"));
        assert_eq!(added.owner, "user-123");
    }

    #[tokio::test]
    async fn test_add_thread_rejects_invalid_payload() {
        let result = service(
            MockThreadRepository::new(),
            MockCommentRepository::new(),
            MockReplyRepository::new(),
            MockLikeRepository::new(),
        )
        .add_thread(None, Some("Dicoding Indonesia".into()), "user-123", "dicoding")
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_detail_fails_when_thread_missing() {
        let mut thread_repo = MockThreadRepository::new();
        let mut comment_repo = MockCommentRepository::new();

        thread_repo
            .expect_get_thread_by_id()
            .returning(|_| Err(AppError::NotFound("thread tidak ditemukan".into())));
        comment_repo.expect_get_comments_by_thread_id().times(0);

        let result = service(
            thread_repo,
            comment_repo,
            MockReplyRepository::new(),
            MockLikeRepository::new(),
        )
        .get_thread_detail("thread-404")
        .await;

        match result {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "thread tidak ditemukan"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_detail_masks_deleted_content_and_keeps_ordering() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

        let mut thread_repo = MockThreadRepository::new();
        let mut comment_repo = MockCommentRepository::new();
        let mut reply_repo = MockReplyRepository::new();
        let mut like_repo = MockLikeRepository::new();

        thread_repo.expect_get_thread_by_id().returning(move |_| {
            Ok(Thread {
                id: "thread-123".into(),
                title: "dicoding thread".into(),
                body: "Dicoding Indonesia".into(),
                owner: "user-123".into(),
                username: "dicoding".into(),
                date,
            })
        });
        comment_repo
            .expect_get_comments_by_thread_id()
            .with(eq("thread-123"))
            .returning(move |_| {
                Ok(vec![
                    Comment {
                        id: "comment-1".into(),
                        username: "dicoding".into(),
                        date,
                        content: "komentar pertama".into(),
                        is_delete: true,
                    },
                    Comment {
                        id: "comment-2".into(),
                        username: "johndoe".into(),
                        date: later,
                        content: "komentar kedua".into(),
                        is_delete: false,
                    },
                ])
            });
        reply_repo
            .expect_get_replies_by_comment_id()
            .with(eq("comment-1"))
            .returning(move |_| {
                Ok(vec![Reply {
                    id: "reply-1".into(),
                    username: "johndoe".into(),
                    date,
                    content: "sebuah balasan".into(),
                    is_delete: true,
                }])
            });
        reply_repo
            .expect_get_replies_by_comment_id()
            .with(eq("comment-2"))
            .returning(|_| Ok(vec![]));
        like_repo
            .expect_count_likes_by_comment_id()
            .with(eq("comment-1"))
            .returning(|_| Ok(2));
        like_repo
            .expect_count_likes_by_comment_id()
            .with(eq("comment-2"))
            .returning(|_| Ok(0));

        let detail = service(thread_repo, comment_repo, reply_repo, like_repo)
            .get_thread_detail("thread-123")
            .await
            .unwrap();

        assert_eq!(detail.id, "thread-123");
        assert_eq!(detail.username, "dicoding");
        assert_eq!(detail.comments.len(), 2);

        // Soft-deleted comment keeps its slot with placeholder content
        assert_eq!(detail.comments[0].id, "comment-1");
        assert_eq!(detail.comments[0].content, "**komentar telah dihapus**");
        assert_eq!(detail.comments[0].like_count, 2);
        assert_eq!(detail.comments[0].replies[0].content, "**balasan telah dihapus**");

        assert_eq!(detail.comments[1].id, "comment-2");
        assert_eq!(detail.comments[1].content, "komentar kedua");
        assert_eq!(detail.comments[1].like_count, 0);
        assert!(detail.comments[1].replies.is_empty());
    }
}
