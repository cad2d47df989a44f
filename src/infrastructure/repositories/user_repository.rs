//! User Repository Implementation
//!
//! PostgreSQL implementation of user operations.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewUser, RegisteredUser, UserRepository};
use crate::shared::error::AppError;

/// PostgreSQL user repository implementation.
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Creates a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for registered-user queries.
#[derive(Debug, sqlx::FromRow)]
struct RegisteredUserRow {
    id: String,
    username: String,
    fullname: String,
}

impl RegisteredUserRow {
    fn into_registered_user(self) -> RegisteredUser {
        RegisteredUser {
            id: self.id,
            username: self.username,
            fullname: self.fullname,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    /// Fail when the username is already registered.
    async fn verify_available_username(&self, username: &str) -> Result<(), AppError> {
        let taken: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users WHERE username = $1
            )
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        if taken.0 {
            return Err(AppError::BadRequest("username tidak tersedia".into()));
        }

        Ok(())
    }

    /// Persist a new user and return the registered view of it.
    async fn add_user(&self, id: &str, user: &NewUser) -> Result<RegisteredUser, AppError> {
        let row = sqlx::query_as::<_, RegisteredUserRow>(
            r#"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            "#,
        )
        .bind(id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.fullname)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_registered_user())
    }

    /// Fetch the stored password hash for a username.
    async fn get_password_by_username(&self, username: &str) -> Result<String, AppError> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT password FROM users WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(password,)| password)
            .ok_or_else(|| AppError::BadRequest("username tidak ditemukan".into()))
    }

    /// Fetch the user id for a username.
    async fn get_id_by_username(&self, username: &str) -> Result<String, AppError> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT id FROM users WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(id,)| id)
            .ok_or_else(|| AppError::BadRequest("username tidak ditemukan".into()))
    }
}
