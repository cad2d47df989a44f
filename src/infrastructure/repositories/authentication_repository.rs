//! Authentication Repository Implementation
//!
//! PostgreSQL implementation of the refresh-token store.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::AuthenticationRepository;
use crate::shared::error::AppError;

/// PostgreSQL refresh-token store implementation.
pub struct PgAuthenticationRepository {
    pool: PgPool,
}

impl PgAuthenticationRepository {
    /// Creates a new PgAuthenticationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for PgAuthenticationRepository {
    /// Persist a refresh-token digest.
    async fn add_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO authentications (token)
            VALUES ($1)
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fail when the digest is not present in the store.
    async fn check_token_availability(&self, token: &str) -> Result<(), AppError> {
        let found: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM authentications WHERE token = $1
            )
            "#,
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        if !found.0 {
            return Err(AppError::BadRequest(
                "refresh token tidak ditemukan di database".into(),
            ));
        }

        Ok(())
    }

    /// Remove a refresh-token digest.
    async fn delete_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            DELETE FROM authentications WHERE token = $1
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
