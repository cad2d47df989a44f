//! User Service
//!
//! Handles user registration.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::security::EncryptionHelper;
use crate::domain::{NewUser, RegisteredUser, UserRepository};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user from a raw payload
    async fn register(
        &self,
        username: Option<String>,
        fullname: Option<String>,
        password: Option<String>,
    ) -> Result<RegisteredUser, AppError>;
}

/// UserService implementation
pub struct UserServiceImpl<U, E>
where
    U: UserRepository,
    E: EncryptionHelper,
{
    user_repo: Arc<U>,
    encryption_helper: Arc<E>,
    id_generator: Arc<IdGenerator>,
}

impl<U, E> UserServiceImpl<U, E>
where
    U: UserRepository,
    E: EncryptionHelper,
{
    pub fn new(user_repo: Arc<U>, encryption_helper: Arc<E>, id_generator: Arc<IdGenerator>) -> Self {
        Self {
            user_repo,
            encryption_helper,
            id_generator,
        }
    }
}

#[async_trait]
impl<U, E> UserService for UserServiceImpl<U, E>
where
    U: UserRepository + 'static,
    E: EncryptionHelper + 'static,
{
    async fn register(
        &self,
        username: Option<String>,
        fullname: Option<String>,
        password: Option<String>,
    ) -> Result<RegisteredUser, AppError> {
        // Validate the payload into a domain entity
        let mut new_user = NewUser::new(username, fullname, password)?;

        // Reject duplicate usernames before any mutation
        self.user_repo
            .verify_available_username(&new_user.username)
            .await?;

        // Store the hash, never the plain password
        new_user.password = self.encryption_helper.hash(&new_user.password)?;

        let id = self.id_generator.generate("user");

        self.user_repo.add_user(&id, &new_user).await
    }
}
