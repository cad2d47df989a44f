//! Comment Repository Implementation
//!
//! PostgreSQL implementation of comment operations. Deletion is a soft
//! delete: the row is kept and `is_delete` is flipped.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddedComment, Comment, CommentRepository, NewComment};
use crate::shared::error::AppError;

/// PostgreSQL comment repository implementation.
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Creates a new PgCommentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for detail-view comment queries.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    is_delete: bool,
}

impl CommentRow {
    /// Converts database row to domain Comment entity.
    fn into_comment(self) -> Comment {
        Comment {
            id: self.id,
            username: self.username,
            date: self.date,
            content: self.content,
            is_delete: self.is_delete,
        }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    /// Persist a new comment under a thread.
    async fn add_comment(
        &self,
        id: &str,
        new_comment: &NewComment,
        thread_id: &str,
        owner: &str,
    ) -> Result<AddedComment, AppError> {
        let row: (String, String, String) = sqlx::query_as(
            r#"
            INSERT INTO comments (id, content, owner, thread_id, date, is_delete)
            VALUES ($1, $2, $3, $4, NOW(), FALSE)
            RETURNING id, content, owner
            "#,
        )
        .bind(id)
        .bind(&new_comment.content)
        .bind(owner)
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedComment {
            id: row.0,
            content: row.1,
            owner: row.2,
        })
    }

    /// Fail with NotFound when the comment does not exist (live) in the thread.
    async fn verify_comment_availability(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<(), AppError> {
        let found: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM comments
                WHERE id = $1 AND thread_id = $2 AND is_delete = FALSE
            )
            "#,
        )
        .bind(comment_id)
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await?;

        if !found.0 {
            return Err(AppError::NotFound("comment tidak ditemukan".into()));
        }

        Ok(())
    }

    /// Check ownership of a comment. Existence is checked first so a missing
    /// comment reports NotFound, never Forbidden.
    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<(), AppError> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT owner FROM comments WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        let stored_owner = row
            .map(|(owner,)| owner)
            .ok_or_else(|| AppError::NotFound("comment tidak ditemukan".into()))?;

        if stored_owner != owner {
            return Err(AppError::Forbidden("comment bukan milik anda".into()));
        }

        Ok(())
    }

    /// Soft-delete a comment.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE comments SET is_delete = TRUE WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("comment tidak ditemukan".into()));
        }

        Ok(())
    }

    /// Fetch all comments in a thread, oldest first, joined with their
    /// authors' usernames. Soft-deleted rows are included so the view can
    /// substitute placeholder content.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, u.username, c.date, c.content, c.is_delete
            FROM comments c
            INNER JOIN users u ON c.owner = u.id
            WHERE c.thread_id = $1
            ORDER BY c.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_comment()).collect())
    }
}
