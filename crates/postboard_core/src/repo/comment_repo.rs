//! Comment repository contract and SQLite implementation.
//!
//! # Invariants
//! - `list_comments` applies `post_scope` and `user_scope` independently;
//!   each one is a no-op when its id is absent.
//! - Inserting a comment whose post or user is unknown fails in the store.

use crate::model::comment::{Comment, NewComment};
use crate::model::{CommentId, PostId, UserId};
use crate::repo::scope::ForeignKeyScope;
use crate::repo::{ensure_table_ready, Page, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const COMMENT_SELECT_SQL: &str = "SELECT
    id,
    post_id,
    user_id,
    body,
    created_at,
    updated_at
FROM comments";
const COMMENT_COLUMNS: &[&str] = &["id", "post_id", "user_id", "body", "created_at", "updated_at"];

/// Query options for listing comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentListQuery {
    pub post_scope: ForeignKeyScope,
    pub user_scope: ForeignKeyScope,
    pub page: Page,
}

impl CommentListQuery {
    /// Comments on `post_id`, or every comment when `None`.
    pub fn by_post(post_id: Option<PostId>) -> Self {
        Self {
            post_scope: ForeignKeyScope::new("post_id", post_id),
            ..Self::default()
        }
    }

    /// Comments written by `user_id`, or every comment when `None`.
    pub fn by_user(user_id: Option<UserId>) -> Self {
        Self {
            user_scope: ForeignKeyScope::new("user_id", user_id),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

impl Default for CommentListQuery {
    fn default() -> Self {
        Self {
            post_scope: ForeignKeyScope::new("post_id", None),
            user_scope: ForeignKeyScope::new("user_id", None),
            page: Page::default(),
        }
    }
}

/// Persistence operations for `comments`.
pub trait CommentRepository {
    fn create_comment(&self, comment: &NewComment) -> RepoResult<Comment>;
    fn get_comment(&self, id: CommentId) -> RepoResult<Option<Comment>>;
    fn list_comments(&self, query: &CommentListQuery) -> RepoResult<Vec<Comment>>;
    fn update_comment(&self, id: CommentId, body: &str) -> RepoResult<()>;
    fn delete_comment(&self, id: CommentId) -> RepoResult<()>;
}

/// SQLite-backed comment repository.
pub struct SqliteCommentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCommentRepository<'conn> {
    /// Constructs a repository over a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "comments", COMMENT_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CommentRepository for SqliteCommentRepository<'_> {
    fn create_comment(&self, comment: &NewComment) -> RepoResult<Comment> {
        self.conn.execute(
            "INSERT INTO comments (post_id, user_id, body) VALUES (?1, ?2, ?3);",
            params![comment.post_id, comment.user_id, comment.body.as_str()],
        )?;
        let id = self.conn.last_insert_rowid();

        self.get_comment(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("created comment {id} missing on read-back"))
        })
    }

    fn get_comment(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let comment = self
            .conn
            .query_row(
                &format!("{COMMENT_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_comment_row,
            )
            .optional()?;
        Ok(comment)
    }

    fn list_comments(&self, query: &CommentListQuery) -> RepoResult<Vec<Comment>> {
        let mut sql = format!("{COMMENT_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        query.post_scope.push_sql(&mut sql, &mut bind_values);
        query.user_scope.push_sql(&mut sql, &mut bind_values);
        sql.push_str(" ORDER BY id ASC");
        query.page.push_sql(&mut sql, &mut bind_values);

        let mut stmt = self.conn.prepare(&sql)?;
        let comments = stmt
            .query_map(params_from_iter(bind_values), parse_comment_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(comments)
    }

    fn update_comment(&self, id: CommentId, body: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE comments
             SET
                body = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![body, id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "comment",
                id,
            });
        }
        Ok(())
    }

    fn delete_comment(&self, id: CommentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM comments WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "comment",
                id,
            });
        }
        Ok(())
    }
}

fn parse_comment_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get("id")?,
        post_id: row.get("post_id")?,
        user_id: row.get("user_id")?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
