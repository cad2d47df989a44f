//! # Domain Entities
//!
//! Core domain entities representing the main business objects in the forum.
//! All entities map directly to their corresponding database tables, and the
//! validated constructors enforce the payload contracts at construction.
//!
//! ## Core Entities
//!
//! - **User**: Registration and login payloads plus the registered account
//! - **Thread**: A top-level discussion owned by one user
//! - **Comment**: A comment under a thread, soft-deletable by its owner
//! - **Reply**: A reply under a comment, soft-deletable by its owner
//! - **Like**: The (comment, user) association toggled by the like endpoint
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod authentication;
mod comment;
mod like;
mod reply;
mod thread;
mod user;

pub use authentication::AuthenticationRepository;
pub use comment::{
    AddedComment, Comment, CommentRepository, NewComment, DELETED_COMMENT_PLACEHOLDER,
};
pub use like::LikeRepository;
pub use reply::{AddedReply, NewReply, Reply, ReplyRepository, DELETED_REPLY_PLACEHOLDER};
pub use thread::{AddedThread, NewThread, Thread, ThreadRepository};
pub use user::{NewUser, RegisteredUser, UserLogin, UserRepository};

// Generated repository mocks for use-case tests
#[cfg(test)]
pub use authentication::MockAuthenticationRepository;
#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use like::MockLikeRepository;
#[cfg(test)]
pub use reply::MockReplyRepository;
#[cfg(test)]
pub use thread::MockThreadRepository;
#[cfg(test)]
pub use user::MockUserRepository;
