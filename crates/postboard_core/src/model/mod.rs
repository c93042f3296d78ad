//! Domain records for users, posts and comments.
//!
//! # Responsibility
//! - Mirror the `users`, `posts` and `comments` tables one struct per row.
//! - Carry foreign keys as plain id fields; associations are resolved by
//!   explicit lookups in the service layer, never stored on the record.
//!
//! # Invariants
//! - Ids are assigned by the store and stay stable for the row's lifetime.
//! - `New*` inputs have no id; persisted records always do.

pub mod comment;
pub mod post;
pub mod user;

/// Store-assigned identifier of a `users` row.
pub type UserId = i64;
/// Store-assigned identifier of a `posts` row.
pub type PostId = i64;
/// Store-assigned identifier of a `comments` row.
pub type CommentId = i64;
