//! Thread entity and repository trait.
//!
//! Maps to the `threads` table. The owner's username is denormalized into
//! the row so the detail view needs no extra join.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::error::AppError;

/// A validated new-thread payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
}

impl NewThread {
    /// Validate a raw thread payload into a `NewThread`.
    pub fn new(title: Option<String>, body: Option<String>) -> Result<Self, AppError> {
        match (title, body) {
            (Some(title), Some(body)) => Ok(Self { title, body }),
            _ => Err(AppError::Validation(
                "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada".into(),
            )),
        }
    }
}

/// A successfully created thread, as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// A thread row as stored in the database.
#[derive(Debug, Clone)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub username: String,
    pub date: DateTime<Utc>,
}

/// Repository trait for thread data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread owned by the given user.
    async fn add_thread(
        &self,
        id: &str,
        new_thread: &NewThread,
        owner_id: &str,
        owner_username: &str,
    ) -> Result<AddedThread, AppError>;

    /// Fetch a thread row, failing with NotFound when no row matches.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread, AppError>;
}
