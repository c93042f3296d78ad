//! Repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - One repository per table: `users`, `posts`, `comments`.
//! - Keep SQL text and row mapping inside the persistence boundary.
//!
//! # Invariants
//! - List reads return rows in `id ASC` order.
//! - Update/delete of a missing row is `RepoError::NotFound`, never a no-op.
//! - Storage errors (including foreign-key violations) pass through as
//!   `RepoError::Db` without translation or retry.

use crate::db::DbError;
use rusqlite::types::Value;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod comment_repo;
pub mod post_repo;
pub mod scope;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by the user, post and comment stores.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { entity: &'static str, id: i64 },
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// Returns whether the store rejected a write on a constraint,
    /// typically a dangling `user_id` or `post_id`.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Db(err) if err.is_constraint_violation())
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Limit/offset window applied to list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    /// Maximum rows to return; `None` means no cap.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

impl Page {
    pub(crate) fn push_sql(&self, sql: &mut String, bind_values: &mut Vec<Value>) {
        if let Some(limit) = self.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if self.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(self.offset)));
            }
        } else if self.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(self.offset)));
        }
    }
}

/// Fails unless `table` exists with every column in `columns`.
pub(crate) fn ensure_table_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(RepoError::MissingRequiredTable(table));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(1)?);
    }

    for &column in columns {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}
