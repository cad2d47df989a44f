//! Authentication Handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{LoginRequest, RefreshTokenRequest};
use crate::application::dto::response::{AccessTokenData, ApiResponse, LoginTokensData};
use crate::application::services::{AuthService, AuthServiceImpl};
use crate::infrastructure::repositories::{PgAuthenticationRepository, PgUserRepository};
use crate::infrastructure::security::{ArgonEncryptionHelper, JwtTokenManager};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn auth_service(
    state: &AppState,
) -> AuthServiceImpl<
    PgUserRepository,
    PgAuthenticationRepository,
    ArgonEncryptionHelper,
    JwtTokenManager,
> {
    let user_repo = Arc::new(PgUserRepository::new(state.db.clone()));
    let auth_repo = Arc::new(PgAuthenticationRepository::new(state.db.clone()));
    let encryption_helper = Arc::new(ArgonEncryptionHelper::new());
    let token_manager = Arc::new(JwtTokenManager::new(state.settings.jwt.clone()));

    AuthServiceImpl::new(user_repo, auth_repo, encryption_helper, token_manager)
}

/// Login with credentials
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<LoginTokensData>>), AppError> {
    let Json(body) = payload
        .map_err(|_| AppError::Validation("username dan password harus string".into()))?;

    let tokens = auth_service(&state)
        .login(body.username, body.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(LoginTokensData {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })),
    ))
}

/// Refresh access token
pub async fn refresh(
    State(state): State<AppState>,
    payload: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AccessTokenData>>, AppError> {
    let Json(body) =
        payload.map_err(|_| AppError::Validation("refresh token harus string".into()))?;

    let access_token = auth_service(&state).refresh(body.refresh_token).await?;

    Ok(Json(ApiResponse::success(AccessTokenData { access_token })))
}

/// Logout (revoke refresh token)
pub async fn logout(
    State(state): State<AppState>,
    payload: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Json(body) =
        payload.map_err(|_| AppError::Validation("refresh token harus string".into()))?;

    auth_service(&state).logout(body.refresh_token).await?;

    Ok(Json(ApiResponse::success_empty()))
}
