//! Thread Handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::CreateThreadRequest;
use crate::application::dto::response::{AddedThreadData, ApiResponse, ThreadDetailData};
use crate::application::services::{ThreadService, ThreadServiceImpl};
use crate::infrastructure::repositories::{
    PgCommentRepository, PgLikeRepository, PgReplyRepository, PgThreadRepository,
};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn thread_service(
    state: &AppState,
) -> ThreadServiceImpl<PgThreadRepository, PgCommentRepository, PgReplyRepository, PgLikeRepository>
{
    let thread_repo = Arc::new(PgThreadRepository::new(state.db.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(state.db.clone()));
    let reply_repo = Arc::new(PgReplyRepository::new(state.db.clone()));
    let like_repo = Arc::new(PgLikeRepository::new(state.db.clone()));

    ThreadServiceImpl::new(
        thread_repo,
        comment_repo,
        reply_repo,
        like_repo,
        state.id_generator.clone(),
    )
}

/// Create a new thread
pub async fn add_thread(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    payload: Result<Json<CreateThreadRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AddedThreadData>>), AppError> {
    let Json(body) = payload.map_err(|_| {
        AppError::Validation(
            "tidak dapat membuat thread baru karena tipe data tidak sesuai".into(),
        )
    })?;

    let added_thread = thread_service(&state)
        .add_thread(body.title, body.body, &auth.id, &auth.username)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedThreadData { added_thread })),
    ))
}

/// Get thread detail with nested comments, replies and like counts
pub async fn thread_detail(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<ApiResponse<ThreadDetailData>>, AppError> {
    let thread = thread_service(&state).get_thread_detail(&thread_id).await?;

    Ok(Json(ApiResponse::success(ThreadDetailData { thread })))
}
