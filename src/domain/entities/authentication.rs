//! Refresh-token store repository trait.
//!
//! Maps to the `authentications` table, which holds the digests of refresh
//! tokens that are currently allowed to mint new access tokens.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// Repository trait for the refresh-token store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    /// Persist a refresh-token digest.
    async fn add_token(&self, token: &str) -> Result<(), AppError>;

    /// Fail when the digest is not present in the store.
    async fn check_token_availability(&self, token: &str) -> Result<(), AppError>;

    /// Remove a refresh-token digest.
    async fn delete_token(&self, token: &str) -> Result<(), AppError>;
}
