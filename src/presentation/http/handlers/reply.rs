//! Reply Handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::CreateReplyRequest;
use crate::application::dto::response::{AddedReplyData, ApiResponse};
use crate::application::services::{ReplyService, ReplyServiceImpl};
use crate::infrastructure::repositories::{
    PgCommentRepository, PgReplyRepository, PgThreadRepository,
};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn reply_service(
    state: &AppState,
) -> ReplyServiceImpl<PgThreadRepository, PgCommentRepository, PgReplyRepository> {
    let thread_repo = Arc::new(PgThreadRepository::new(state.db.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(state.db.clone()));
    let reply_repo = Arc::new(PgReplyRepository::new(state.db.clone()));

    ReplyServiceImpl::new(
        thread_repo,
        comment_repo,
        reply_repo,
        state.id_generator.clone(),
    )
}

/// Add a reply to a comment
pub async fn add_reply(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    payload: Result<Json<CreateReplyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AddedReplyData>>), AppError> {
    let Json(body) = payload.map_err(|_| {
        AppError::Validation("tidak dapat membuat reply baru karena tipe data tidak sesuai".into())
    })?;

    let added_reply = reply_service(&state)
        .add_reply(&thread_id, &comment_id, &auth.id, body.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedReplyData { added_reply })),
    ))
}

/// Soft-delete a reply owned by the requesting user
pub async fn delete_reply(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    reply_service(&state)
        .delete_reply(&thread_id, &comment_id, &reply_id, &auth.id)
        .await?;

    Ok(Json(ApiResponse::success_empty()))
}
