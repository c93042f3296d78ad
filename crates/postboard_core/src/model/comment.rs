//! Comment record.
//!
//! # Invariants
//! - `post_id` and `user_id` both reference existing rows; the store's
//!   foreign-key constraints reject anything else.

use crate::model::{CommentId, PostId, UserId};
use serde::{Deserialize, Serialize};

/// A comment on one post, written by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    /// Commented post (belongs-to).
    pub post_id: PostId,
    /// Author (belongs-to).
    pub user_id: UserId,
    pub body: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Bumped on every update.
    pub updated_at: i64,
}

/// Input for inserting a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub post_id: PostId,
    pub user_id: UserId,
    pub body: String,
}

impl NewComment {
    pub fn new(post_id: PostId, user_id: UserId, body: impl Into<String>) -> Self {
        Self {
            post_id,
            user_id,
            body: body.into(),
        }
    }
}
