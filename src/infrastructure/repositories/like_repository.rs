//! Like Repository Implementation
//!
//! PostgreSQL implementation of comment-like operations. One row per
//! (comment, user) pair, enforced by a unique constraint.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::LikeRepository;
use crate::shared::error::AppError;

/// PostgreSQL like repository implementation.
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Creates a new PgLikeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    /// Whether the user currently likes the comment.
    ///
    /// Efficient single-row check using EXISTS.
    async fn has_user_liked(&self, comment_id: &str, owner: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM likes
                WHERE comment_id = $1 AND owner = $2
            )
            "#,
        )
        .bind(comment_id)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Persist a like row for the (comment, user) pair.
    ///
    /// Uses INSERT ON CONFLICT so a concurrent duplicate insert is a no-op
    /// rather than a constraint violation.
    async fn add_like(&self, id: &str, comment_id: &str, owner: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO likes (id, comment_id, owner)
            VALUES ($1, $2, $3)
            ON CONFLICT (comment_id, owner) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(comment_id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove the like row for the (comment, user) pair.
    ///
    /// Silently succeeds if the like doesn't exist.
    async fn delete_like(&self, comment_id: &str, owner: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            DELETE FROM likes
            WHERE comment_id = $1 AND owner = $2
            "#,
        )
        .bind(comment_id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Count likes on a comment.
    async fn count_likes_by_comment_id(&self, comment_id: &str) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM likes WHERE comment_id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
