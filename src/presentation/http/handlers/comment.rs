//! Comment Handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::CreateCommentRequest;
use crate::application::dto::response::{AddedCommentData, ApiResponse};
use crate::application::services::{CommentService, CommentServiceImpl};
use crate::infrastructure::repositories::{PgCommentRepository, PgThreadRepository};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn comment_service(
    state: &AppState,
) -> CommentServiceImpl<PgThreadRepository, PgCommentRepository> {
    let thread_repo = Arc::new(PgThreadRepository::new(state.db.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(state.db.clone()));

    CommentServiceImpl::new(thread_repo, comment_repo, state.id_generator.clone())
}

/// Add a comment to a thread
pub async fn add_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(thread_id): Path<String>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AddedCommentData>>), AppError> {
    let Json(body) = payload.map_err(|_| {
        AppError::Validation(
            "tidak dapat membuat comment baru karena tipe data tidak sesuai".into(),
        )
    })?;

    let added_comment = comment_service(&state)
        .add_comment(&thread_id, &auth.id, body.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedCommentData { added_comment })),
    ))
}

/// Soft-delete a comment owned by the requesting user
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    comment_service(&state)
        .delete_comment(&thread_id, &comment_id, &auth.id)
        .await?;

    Ok(Json(ApiResponse::success_empty()))
}
