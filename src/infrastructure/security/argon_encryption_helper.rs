//! Argon2 Encryption Helper
//!
//! Argon2id implementation of the password hashing capability.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::application::security::EncryptionHelper;
use crate::shared::error::AppError;

/// Argon2-backed password hashing.
#[derive(Debug, Default)]
pub struct ArgonEncryptionHelper;

impl ArgonEncryptionHelper {
    /// Create a new helper with the default Argon2id parameters.
    pub fn new() -> Self {
        Self
    }
}

impl EncryptionHelper for ArgonEncryptionHelper {
    /// Hash a password using Argon2id with a fresh random salt.
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
    }

    /// Verify a password against its stored hash.
    fn compare_password(&self, password: &str, hashed_password: &str) -> Result<(), AppError> {
        let parsed_hash = PasswordHash::new(hashed_password)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized("kredensial yang Anda masukkan salah".into()))
    }
}
