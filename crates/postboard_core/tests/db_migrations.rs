use postboard_core::db::migrations::{latest_version, schema_version};
use postboard_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    for table in ["users", "posts", "comments"] {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn foreign_keys_are_enforced_on_returned_connections() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn foreign_key_columns_are_indexed() {
    let conn = open_db_in_memory().unwrap();
    for index in [
        "index_posts_on_user_id",
        "index_comments_on_post_id",
        "index_comments_on_user_id",
    ] {
        let exists: i64 = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'index' AND name = ?1);",
                [index],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(exists, 1, "index {index} does not exist");
    }
}

#[test]
fn reopening_a_file_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("postboard.sqlite3");

    let first = open_db(&path).unwrap();
    first
        .execute("INSERT INTO users (name) VALUES ('ada');", [])
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second).unwrap(), latest_version());
    let users: i64 = second
        .query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(users, 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
