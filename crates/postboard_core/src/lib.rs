//! Core domain for Postboard: users, their posts, and comments on posts.
//! Owns the SQLite schema, repositories and the optional-filter scopes.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::comment::{Comment, NewComment};
pub use model::post::{NewPost, Post};
pub use model::user::{NewUser, User};
pub use model::{CommentId, PostId, UserId};
pub use repo::comment_repo::{CommentListQuery, CommentRepository, SqliteCommentRepository};
pub use repo::post_repo::{PostListQuery, PostRepository, SqlitePostRepository};
pub use repo::scope::ForeignKeyScope;
pub use repo::user_repo::{SqliteUserRepository, UserListQuery, UserRepository};
pub use repo::{Page, RepoError, RepoResult};
pub use service::comment_service::CommentService;
pub use service::post_service::PostService;
pub use service::user_service::UserService;

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
