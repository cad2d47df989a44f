//! Reply Repository Implementation
//!
//! PostgreSQL implementation of reply operations, mirroring the comment
//! repository but scoped to a parent comment.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddedReply, NewReply, Reply, ReplyRepository};
use crate::shared::error::AppError;

/// PostgreSQL reply repository implementation.
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Creates a new PgReplyRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for detail-view reply queries.
#[derive(Debug, sqlx::FromRow)]
struct ReplyRow {
    id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    is_delete: bool,
}

impl ReplyRow {
    /// Converts database row to domain Reply entity.
    fn into_reply(self) -> Reply {
        Reply {
            id: self.id,
            username: self.username,
            date: self.date,
            content: self.content,
            is_delete: self.is_delete,
        }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    /// Persist a new reply under a comment.
    async fn add_reply(
        &self,
        id: &str,
        new_reply: &NewReply,
        comment_id: &str,
        owner: &str,
    ) -> Result<AddedReply, AppError> {
        let row: (String, String, String) = sqlx::query_as(
            r#"
            INSERT INTO replies (id, content, owner, comment_id, date, is_delete)
            VALUES ($1, $2, $3, $4, NOW(), FALSE)
            RETURNING id, content, owner
            "#,
        )
        .bind(id)
        .bind(&new_reply.content)
        .bind(owner)
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedReply {
            id: row.0,
            content: row.1,
            owner: row.2,
        })
    }

    /// Fail with NotFound when the reply does not exist (live) under the comment.
    async fn verify_reply_availability(
        &self,
        reply_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError> {
        let found: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM replies
                WHERE id = $1 AND comment_id = $2 AND is_delete = FALSE
            )
            "#,
        )
        .bind(reply_id)
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await?;

        if !found.0 {
            return Err(AppError::NotFound("reply tidak ditemukan".into()));
        }

        Ok(())
    }

    /// Check ownership of a reply. Existence is checked first so a missing
    /// reply reports NotFound, never Forbidden.
    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<(), AppError> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT owner FROM replies WHERE id = $1
            "#,
        )
        .bind(reply_id)
        .fetch_optional(&self.pool)
        .await?;

        let stored_owner = row
            .map(|(owner,)| owner)
            .ok_or_else(|| AppError::NotFound("reply tidak ditemukan".into()))?;

        if stored_owner != owner {
            return Err(AppError::Forbidden("reply bukan milik anda".into()));
        }

        Ok(())
    }

    /// Soft-delete a reply.
    async fn delete_reply(&self, reply_id: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE replies SET is_delete = TRUE WHERE id = $1
            "#,
        )
        .bind(reply_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("reply tidak ditemukan".into()));
        }

        Ok(())
    }

    /// Fetch all replies under a comment, oldest first, joined with their
    /// authors' usernames.
    async fn get_replies_by_comment_id(&self, comment_id: &str) -> Result<Vec<Reply>, AppError> {
        let rows = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT r.id, u.username, r.date, r.content, r.is_delete
            FROM replies r
            INNER JOIN users u ON r.owner = u.id
            WHERE r.comment_id = $1
            ORDER BY r.date ASC
            "#,
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_reply()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_preserves_fields() {
        let date = Utc::now();
        let row = ReplyRow {
            id: "reply-123".into(),
            username: "johndoe".into(),
            date,
            content: "sebuah balasan".into(),
            is_delete: false,
        };

        let reply = row.into_reply();

        assert_eq!(reply.id, "reply-123");
        assert_eq!(reply.username, "johndoe");
        assert_eq!(reply.date, date);
        assert!(!reply.is_delete);
    }
}
