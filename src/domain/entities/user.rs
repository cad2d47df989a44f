//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use serde::Serialize;

use crate::shared::error::AppError;

/// A validated registration payload.
///
/// Construction enforces the payload contract: all fields present, username
/// at most 50 characters and restricted to `[A-Za-z0-9_]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub fullname: String,
    pub password: String,
}

impl NewUser {
    /// Validate a raw registration payload into a `NewUser`.
    pub fn new(
        username: Option<String>,
        fullname: Option<String>,
        password: Option<String>,
    ) -> Result<Self, AppError> {
        let (username, fullname, password) = match (username, fullname, password) {
            (Some(u), Some(f), Some(p)) => (u, f, p),
            _ => {
                return Err(AppError::Validation(
                    "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada"
                        .into(),
                ))
            }
        };

        if username.len() > 50 {
            return Err(AppError::Validation(
                "tidak dapat membuat user baru karena karakter username melebihi batas limit"
                    .into(),
            ));
        }

        if username.is_empty() || !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(AppError::Validation(
                "tidak dapat membuat user baru karena username mengandung karakter terlarang"
                    .into(),
            ));
        }

        Ok(Self {
            username,
            fullname,
            password,
        })
    }
}

/// A successfully registered user, as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// A validated login payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl UserLogin {
    /// Validate a raw login payload into a `UserLogin`.
    pub fn new(username: Option<String>, password: Option<String>) -> Result<Self, AppError> {
        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(AppError::Validation(
                "harus mengirimkan username dan password".into(),
            )),
        }
    }
}

/// Repository trait for user data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fail when the username is already registered.
    async fn verify_available_username(&self, username: &str) -> Result<(), AppError>;

    /// Persist a new user. The password in `user` must already be hashed.
    async fn add_user(&self, id: &str, user: &NewUser) -> Result<RegisteredUser, AppError>;

    /// Fetch the stored password hash for a username.
    async fn get_password_by_username(&self, username: &str) -> Result<String, AppError>;

    /// Fetch the user id for a username.
    async fn get_id_by_username(&self, username: &str) -> Result<String, AppError>;
}
