//! Repository Implementations
//!
//! PostgreSQL adapters for the domain repository traits. Each adapter
//! executes parameterized SQL against the shared connection pool and
//! translates "not found" into the domain-level error.

mod authentication_repository;
mod comment_repository;
mod like_repository;
mod reply_repository;
mod thread_repository;
mod user_repository;

pub use authentication_repository::PgAuthenticationRepository;
pub use comment_repository::PgCommentRepository;
pub use like_repository::PgLikeRepository;
pub use reply_repository::PgReplyRepository;
pub use thread_repository::PgThreadRepository;
pub use user_repository::PgUserRepository;
