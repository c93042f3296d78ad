//! User repository contract and SQLite implementation.

use crate::model::user::{NewUser, User};
use crate::model::UserId;
use crate::repo::{ensure_table_ready, Page, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const USER_SELECT_SQL: &str = "SELECT id, name, created_at FROM users";
const USER_COLUMNS: &[&str] = &["id", "name", "created_at"];

/// Query options for listing users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub page: Page,
}

/// Persistence operations for `users`.
pub trait UserRepository {
    fn create_user(&self, user: &NewUser) -> RepoResult<User>;
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
    fn list_users(&self, query: &UserListQuery) -> RepoResult<Vec<User>>;
    fn rename_user(&self, id: UserId, name: &str) -> RepoResult<()>;
    /// Fails with a constraint error while posts or comments still reference the user.
    fn delete_user(&self, id: UserId) -> RepoResult<()>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository over a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "users", USER_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, user: &NewUser) -> RepoResult<User> {
        self.conn
            .execute("INSERT INTO users (name) VALUES (?1);", [user.name.as_str()])?;
        let id = self.conn.last_insert_rowid();

        self.get_user(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("created user {id} missing on read-back"))
        })
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("{USER_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_user_row,
            )
            .optional()?;
        Ok(user)
    }

    fn list_users(&self, query: &UserListQuery) -> RepoResult<Vec<User>> {
        let mut sql = format!("{USER_SELECT_SQL} ORDER BY id ASC");
        let mut bind_values: Vec<Value> = Vec::new();
        query.page.push_sql(&mut sql, &mut bind_values);

        let mut stmt = self.conn.prepare(&sql)?;
        let users = stmt
            .query_map(params_from_iter(bind_values), parse_user_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    fn rename_user(&self, id: UserId, name: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("UPDATE users SET name = ?1 WHERE id = ?2;", params![name, id])?;
        if changed == 0 {
            return Err(RepoError::NotFound { entity: "user", id });
        }
        Ok(())
    }

    fn delete_user(&self, id: UserId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM users WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound { entity: "user", id });
        }
        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}
