//! Post repository contract and SQLite implementation.
//!
//! # Invariants
//! - `list_posts` honours `PostListQuery::user_scope` as an optional filter:
//!   an absent user id lists every post.
//! - Inserting a post for an unknown user fails in the store (FK), not here.

use crate::model::post::{NewPost, Post};
use crate::model::{PostId, UserId};
use crate::repo::scope::ForeignKeyScope;
use crate::repo::{ensure_table_ready, Page, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const POST_SELECT_SQL: &str = "SELECT
    id,
    user_id,
    title,
    body,
    created_at,
    updated_at
FROM posts";
const POST_COLUMNS: &[&str] = &["id", "user_id", "title", "body", "created_at", "updated_at"];

/// Query options for listing posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostListQuery {
    pub user_scope: ForeignKeyScope,
    pub page: Page,
}

impl PostListQuery {
    /// Posts owned by `user_id`, or every post when `None`.
    pub fn by_user(user_id: Option<UserId>) -> Self {
        Self {
            user_scope: ForeignKeyScope::new("user_id", user_id),
            page: Page::default(),
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

impl Default for PostListQuery {
    fn default() -> Self {
        Self::by_user(None)
    }
}

/// Persistence operations for `posts`.
pub trait PostRepository {
    fn create_post(&self, post: &NewPost) -> RepoResult<Post>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>>;
    /// Replaces title and body; ownership is not reassignable.
    fn update_post(&self, id: PostId, title: &str, body: &str) -> RepoResult<()>;
    /// Fails with a constraint error while comments still reference the post.
    fn delete_post(&self, id: PostId) -> RepoResult<()>;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    /// Constructs a repository over a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "posts", POST_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &NewPost) -> RepoResult<Post> {
        self.conn.execute(
            "INSERT INTO posts (user_id, title, body) VALUES (?1, ?2, ?3);",
            params![post.user_id, post.title.as_str(), post.body.as_str()],
        )?;
        let id = self.conn.last_insert_rowid();

        self.get_post(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("created post {id} missing on read-back"))
        })
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let post = self
            .conn
            .query_row(
                &format!("{POST_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_post_row,
            )
            .optional()?;
        Ok(post)
    }

    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        let mut sql = format!("{POST_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        query.user_scope.push_sql(&mut sql, &mut bind_values);
        sql.push_str(" ORDER BY id ASC");
        query.page.push_sql(&mut sql, &mut bind_values);

        let mut stmt = self.conn.prepare(&sql)?;
        let posts = stmt
            .query_map(params_from_iter(bind_values), parse_post_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(posts)
    }

    fn update_post(&self, id: PostId, title: &str, body: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE posts
             SET
                title = ?1,
                body = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?3;",
            params![title, body, id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound { entity: "post", id });
        }
        Ok(())
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM posts WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound { entity: "post", id });
        }
        Ok(())
    }
}

fn parse_post_row(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        title: row.get("title")?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
