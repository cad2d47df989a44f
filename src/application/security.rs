//! Security Capabilities
//!
//! Password hashing and signed-token management contracts. The concrete
//! implementations live in the infrastructure layer and are injected into
//! services as capabilities.

use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Identity carried inside issued tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// User id (`user-` prefixed)
    pub id: String,

    /// Username at issuance time
    pub username: String,
}

/// Token pair issued at login.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Password hashing capability.
#[cfg_attr(test, mockall::automock)]
pub trait EncryptionHelper: Send + Sync {
    /// Hash a plain password for storage.
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Compare a plain password against a stored hash.
    ///
    /// Fails with an authentication error on mismatch.
    fn compare_password(&self, password: &str, hashed_password: &str) -> Result<(), AppError>;
}

/// Signed-token issuance and verification capability.
#[cfg_attr(test, mockall::automock)]
pub trait TokenManager: Send + Sync {
    /// Issue a short-lived access token carrying the payload.
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, AppError>;

    /// Issue a refresh token carrying the payload.
    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError>;

    /// Verify a refresh token's signature.
    fn verify_refresh_token(&self, token: &str) -> Result<(), AppError>;

    /// Extract the payload from a verified refresh token.
    fn decode_payload(&self, token: &str) -> Result<TokenPayload, AppError>;
}
