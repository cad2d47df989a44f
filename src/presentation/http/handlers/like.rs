//! Like Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    Json,
};

use crate::application::dto::response::ApiResponse;
use crate::application::services::{LikeService, LikeServiceImpl};
use crate::infrastructure::repositories::{
    PgCommentRepository, PgLikeRepository, PgThreadRepository,
};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Toggle the requesting user's like on a comment
pub async fn toggle_like(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let thread_repo = Arc::new(PgThreadRepository::new(state.db.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(state.db.clone()));
    let like_repo = Arc::new(PgLikeRepository::new(state.db.clone()));

    let like_service = LikeServiceImpl::new(
        thread_repo,
        comment_repo,
        like_repo,
        state.id_generator.clone(),
    );

    like_service
        .toggle_like(&thread_id, &comment_id, &auth.id)
        .await?;

    Ok(Json(ApiResponse::success_empty()))
}
