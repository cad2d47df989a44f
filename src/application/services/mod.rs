//! Application Services
//!
//! Use-case services that coordinate domain operations. Each service
//! orchestrates one aggregate's operations by calling repositories in a
//! fixed sequence and enforcing authorization before any mutation.
//!
//! ## Available Services
//!
//! - **UserService**: User registration
//! - **AuthService**: Login, access-token refresh, logout
//! - **ThreadService**: Thread creation and the detail view
//! - **CommentService**: Comments under a thread
//! - **ReplyService**: Replies under a comment
//! - **LikeService**: Comment like toggling

pub mod auth_service;
pub mod comment_service;
pub mod like_service;
pub mod reply_service;
pub mod thread_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthServiceImpl};
pub use comment_service::{CommentService, CommentServiceImpl};
pub use like_service::{LikeService, LikeServiceImpl};
pub use reply_service::{ReplyService, ReplyServiceImpl};
pub use thread_service::{ThreadService, ThreadServiceImpl};
pub use user_service::{UserService, UserServiceImpl};
