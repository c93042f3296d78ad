//! Post record.
//!
//! # Invariants
//! - `user_id` references an existing `users.id`; enforced by the store's
//!   foreign-key constraint, not here.

use crate::model::{PostId, UserId};
use serde::{Deserialize, Serialize};

/// A post owned by one user. Has many comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Owning user (belongs-to).
    pub user_id: UserId,
    pub title: String,
    pub body: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Bumped on every update.
    pub updated_at: i64,
}

/// Input for inserting a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

impl NewPost {
    /// Builds a post input with an empty body.
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}
