//! Thread Repository Implementation
//!
//! PostgreSQL implementation of thread operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddedThread, NewThread, Thread, ThreadRepository};
use crate::shared::error::AppError;

/// PostgreSQL thread repository implementation.
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Creates a new PgThreadRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for thread queries.
/// Maps to the threads table schema defined in the migration.
#[derive(Debug, sqlx::FromRow)]
struct ThreadRow {
    id: String,
    title: String,
    body: String,
    owner: String,
    username: String,
    date: DateTime<Utc>,
}

impl ThreadRow {
    /// Converts database row to domain Thread entity.
    fn into_thread(self) -> Thread {
        Thread {
            id: self.id,
            title: self.title,
            body: self.body,
            owner: self.owner,
            username: self.username,
            date: self.date,
        }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    /// Persist a new thread owned by the given user.
    ///
    /// The owner's username is denormalized into the row for the detail view.
    async fn add_thread(
        &self,
        id: &str,
        new_thread: &NewThread,
        owner_id: &str,
        owner_username: &str,
    ) -> Result<AddedThread, AppError> {
        let row: (String, String, String) = sqlx::query_as(
            r#"
            INSERT INTO threads (id, title, body, owner, username, date)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, title, owner
            "#,
        )
        .bind(id)
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(owner_id)
        .bind(owner_username)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedThread {
            id: row.0,
            title: row.1,
            owner: row.2,
        })
    }

    /// Fetch a thread row.
    ///
    /// Fails with NotFound when no row matches.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread, AppError> {
        let row = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT id, title, body, owner, username, date
            FROM threads
            WHERE id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_thread())
            .ok_or_else(|| AppError::NotFound("thread tidak ditemukan".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_preserves_fields() {
        let date = Utc::now();
        let row = ThreadRow {
            id: "thread-123".into(),
            title: "dicoding thread".into(),
            body: "Dicoding Indonesia".into(),
            owner: "user-123".into(),
            username: "dicoding".into(),
            date,
        };

        let thread = row.into_thread();

        assert_eq!(thread.id, "thread-123");
        assert_eq!(thread.owner, "user-123");
        assert_eq!(thread.username, "dicoding");
        assert_eq!(thread.date, date);
    }
}
