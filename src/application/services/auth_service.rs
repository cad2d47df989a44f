//! Authentication Service
//!
//! Handles login, access-token refresh, and logout against the
//! refresh-token store.

use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::application::security::{AuthTokens, EncryptionHelper, TokenManager, TokenPayload};
use crate::domain::{AuthenticationRepository, UserLogin, UserRepository};
use crate::shared::error::AppError;

/// Authentication service trait
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate credentials and issue a token pair
    async fn login(
        &self,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<AuthTokens, AppError>;

    /// Mint a new access token from a registered refresh token
    async fn refresh(&self, refresh_token: Option<String>) -> Result<String, AppError>;

    /// Revoke a registered refresh token
    async fn logout(&self, refresh_token: Option<String>) -> Result<(), AppError>;
}

/// AuthService implementation
pub struct AuthServiceImpl<U, A, E, T>
where
    U: UserRepository,
    A: AuthenticationRepository,
    E: EncryptionHelper,
    T: TokenManager,
{
    user_repo: Arc<U>,
    auth_repo: Arc<A>,
    encryption_helper: Arc<E>,
    token_manager: Arc<T>,
}

impl<U, A, E, T> AuthServiceImpl<U, A, E, T>
where
    U: UserRepository,
    A: AuthenticationRepository,
    E: EncryptionHelper,
    T: TokenManager,
{
    pub fn new(
        user_repo: Arc<U>,
        auth_repo: Arc<A>,
        encryption_helper: Arc<E>,
        token_manager: Arc<T>,
    ) -> Self {
        Self {
            user_repo,
            auth_repo,
            encryption_helper,
            token_manager,
        }
    }

    /// Digest a refresh token for storage; only digests hit the database.
    fn hash_refresh_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Reject a missing refresh-token payload before touching the store.
    fn require_refresh_token(refresh_token: Option<String>) -> Result<String, AppError> {
        refresh_token
            .ok_or_else(|| AppError::Validation("harus mengirimkan token refresh".into()))
    }
}

#[async_trait]
impl<U, A, E, T> AuthService for AuthServiceImpl<U, A, E, T>
where
    U: UserRepository + 'static,
    A: AuthenticationRepository + 'static,
    E: EncryptionHelper + 'static,
    T: TokenManager + 'static,
{
    async fn login(
        &self,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<AuthTokens, AppError> {
        let login = UserLogin::new(username, password)?;

        let hashed_password = self
            .user_repo
            .get_password_by_username(&login.username)
            .await?;

        self.encryption_helper
            .compare_password(&login.password, &hashed_password)?;

        let id = self.user_repo.get_id_by_username(&login.username).await?;

        let payload = TokenPayload {
            id,
            username: login.username,
        };

        let access_token = self.token_manager.create_access_token(&payload)?;
        let refresh_token = self.token_manager.create_refresh_token(&payload)?;

        self.auth_repo
            .add_token(&Self::hash_refresh_token(&refresh_token))
            .await?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
        })
    }

    async fn refresh(&self, refresh_token: Option<String>) -> Result<String, AppError> {
        let token = Self::require_refresh_token(refresh_token)?;

        self.token_manager.verify_refresh_token(&token)?;

        self.auth_repo
            .check_token_availability(&Self::hash_refresh_token(&token))
            .await?;

        let payload = self.token_manager.decode_payload(&token)?;

        self.token_manager.create_access_token(&payload)
    }

    async fn logout(&self, refresh_token: Option<String>) -> Result<(), AppError> {
        let token = Self::require_refresh_token(refresh_token)?;
        let digest = Self::hash_refresh_token(&token);

        self.auth_repo.check_token_availability(&digest).await?;
        self.auth_repo.delete_token(&digest).await
    }
}
