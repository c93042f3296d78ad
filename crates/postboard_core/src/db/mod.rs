//! SQLite storage bootstrap for users, posts and comments.
//!
//! # Responsibility
//! - Open connections with foreign-key enforcement switched on.
//! - Apply schema migrations before any repository touches the data.
//!
//! # Invariants
//! - Referential integrity between `posts`, `comments` and `users` is the
//!   store's job; a connection without `foreign_keys=ON` is never returned.
//! - Schema version is tracked via `PRAGMA user_version`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// The SQLite build ignored `PRAGMA foreign_keys = ON`.
    ForeignKeysUnavailable,
}

impl DbError {
    /// Returns whether this is a constraint failure raised by the store,
    /// e.g. a comment pointing at a post that does not exist.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Sqlite(rusqlite::Error::SqliteFailure(err, _)) => {
                err.code == rusqlite::ErrorCode::ConstraintViolation
            }
            _ => false,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::ForeignKeysUnavailable => {
                write!(f, "sqlite build does not enforce foreign keys")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::ForeignKeysUnavailable => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
