//! User Handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::RegisterUserRequest;
use crate::application::dto::response::{AddedUserData, ApiResponse};
use crate::application::services::{UserService, UserServiceImpl};
use crate::infrastructure::repositories::PgUserRepository;
use crate::infrastructure::security::ArgonEncryptionHelper;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AddedUserData>>), AppError> {
    // Non-string fields fail deserialization, not domain validation
    let Json(body) = payload.map_err(|_| {
        AppError::Validation(
            "tidak dapat membuat user baru karena tipe data tidak sesuai".into(),
        )
    })?;

    // Create service
    let user_repo = Arc::new(PgUserRepository::new(state.db.clone()));
    let encryption_helper = Arc::new(ArgonEncryptionHelper::new());
    let user_service =
        UserServiceImpl::new(user_repo, encryption_helper, state.id_generator.clone());

    // Register user
    let added_user = user_service
        .register(body.username, body.fullname, body.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedUserData { added_user })),
    ))
}
