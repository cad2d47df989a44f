//! JWT Token Manager
//!
//! jsonwebtoken implementation of the token management capability. Access
//! tokens expire; refresh tokens carry no expiry and are bounded by their
//! presence in the refresh-token store instead.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::security::{TokenManager, TokenPayload};
use crate::config::JwtSettings;
use crate::shared::error::AppError;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id
    id: String,
    /// Username at issuance time
    username: String,
    /// Expiration time (Unix timestamp); absent on refresh tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

/// jsonwebtoken-backed token manager.
pub struct JwtTokenManager {
    settings: JwtSettings,
}

impl JwtTokenManager {
    /// Create a token manager over the configured signing keys.
    pub fn new(settings: JwtSettings) -> Self {
        Self { settings }
    }

    /// Validation rules for refresh tokens: signature only, no exp claim.
    fn refresh_validation() -> Validation {
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();
        validation
    }

    fn decode_refresh_claims(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.settings.refresh_token_key.as_bytes()),
            &Self::refresh_validation(),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::BadRequest("refresh token tidak valid".into()))
    }
}

impl TokenManager for JwtTokenManager {
    /// Issue a short-lived access token.
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        let expiry =
            chrono::Utc::now() + chrono::Duration::minutes(self.settings.access_token_age_minutes);

        let claims = Claims {
            id: payload.id.clone(),
            username: payload.username.clone(),
            exp: Some(expiry.timestamp()),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.access_token_key.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }

    /// Issue a refresh token signed with the refresh key.
    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        let claims = Claims {
            id: payload.id.clone(),
            username: payload.username.clone(),
            exp: None,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.refresh_token_key.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }

    /// Verify a refresh token's signature.
    fn verify_refresh_token(&self, token: &str) -> Result<(), AppError> {
        self.decode_refresh_claims(token).map(|_| ())
    }

    /// Extract the payload from a verified refresh token.
    fn decode_payload(&self, token: &str) -> Result<TokenPayload, AppError> {
        let claims = self.decode_refresh_claims(token)?;

        Ok(TokenPayload {
            id: claims.id,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> JwtSettings {
        JwtSettings {
            access_token_key: "access_token_key_with_enough_length_1234".into(),
            refresh_token_key: "refresh_token_key_with_enough_length_1234".into(),
            access_token_age_minutes: 30,
        }
    }

    fn payload() -> TokenPayload {
        TokenPayload {
            id: "user-123".into(),
            username: "dicoding".into(),
        }
    }

    #[test]
    fn test_refresh_token_roundtrip() {
        let manager = JwtTokenManager::new(settings());

        let token = manager.create_refresh_token(&payload()).unwrap();

        assert!(manager.verify_refresh_token(&token).is_ok());
        let decoded = manager.decode_payload(&token).unwrap();
        assert_eq!(decoded.id, "user-123");
        assert_eq!(decoded.username, "dicoding");
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let manager = JwtTokenManager::new(settings());

        let token = manager.create_refresh_token(&payload()).unwrap();
        let tampered = format!("{}x", token);

        let result = manager.verify_refresh_token(&tampered);

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "refresh token tidak valid"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_access_token_is_not_a_valid_refresh_token() {
        let manager = JwtTokenManager::new(settings());

        let access_token = manager.create_access_token(&payload()).unwrap();

        // signed with a different key, so refresh verification must fail
        assert!(manager.verify_refresh_token(&access_token).is_err());
    }

    #[test]
    fn test_access_token_carries_expiry() {
        let manager = JwtTokenManager::new(settings());

        let access_token = manager.create_access_token(&payload()).unwrap();

        let decoded = decode::<Claims>(
            &access_token,
            &DecodingKey::from_secret(settings().access_token_key.as_bytes()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.id, "user-123");
        assert!(decoded.claims.exp.unwrap() > chrono::Utc::now().timestamp());
    }
}
