//! Use-case services over the user, post and comment repositories.
//!
//! # Responsibility
//! - Expose CRUD and the two optional-filter scopes (`by_user`, `by_post`).
//! - Resolve associations as explicit second lookups (`associations`).
//!
//! # Invariants
//! - Services stay storage-agnostic; all SQL lives in `repo`.

pub mod associations;
pub mod comment_service;
pub mod post_service;
pub mod user_service;
