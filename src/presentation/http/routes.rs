//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Public routes
        .route("/users", post(handlers::user::register))
        .route(
            "/authentications",
            post(handlers::auth::login)
                .put(handlers::auth::refresh)
                .delete(handlers::auth::logout),
        )
        .merge(thread_routes(state.clone()))
        // Health check endpoint
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// Thread routes: the detail view is public, every mutation requires a
/// Bearer access token.
fn thread_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/threads", post(handlers::thread::add_thread))
        .route(
            "/threads/{thread_id}/comments",
            post(handlers::comment::add_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::comment::delete_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(handlers::reply::add_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(handlers::reply::delete_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(handlers::like::toggle_like),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    let public = Router::new().route(
        "/threads/{thread_id}",
        get(handlers::thread::thread_detail),
    );

    protected.merge(public)
}
