//! Security Implementations
//!
//! Concrete password hashing and token management backends for the
//! application-layer capability traits.

mod argon_encryption_helper;
mod jwt_token_manager;

pub use argon_encryption_helper::ArgonEncryptionHelper;
pub use jwt_token_manager::JwtTokenManager;
