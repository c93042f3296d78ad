//! User record.

use crate::model::UserId;
use serde::{Deserialize, Serialize};

/// Author of posts and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Input for inserting a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
