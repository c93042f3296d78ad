use postboard_core::db::open_db_in_memory;
use postboard_core::{
    CommentRepository, CommentService, NewPost, Page, PostRepository, PostService, RepoError,
    SqliteCommentRepository, SqlitePostRepository, SqliteUserRepository, UserService,
};
use rusqlite::Connection;

fn users(conn: &Connection) -> UserService<SqliteUserRepository<'_>> {
    UserService::new(SqliteUserRepository::try_new(conn).unwrap())
}

fn posts(conn: &Connection) -> PostService<SqlitePostRepository<'_>> {
    PostService::new(SqlitePostRepository::try_new(conn).unwrap())
}

fn comments(conn: &Connection) -> CommentService<SqliteCommentRepository<'_>> {
    CommentService::new(SqliteCommentRepository::try_new(conn).unwrap())
}

#[test]
fn create_and_get_post_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let author = users(&conn).create_user("ada").unwrap();

    let repo = SqlitePostRepository::try_new(&conn).unwrap();
    let created = repo
        .create_post(&NewPost::new(author.id, "hello").with_body("first body"))
        .unwrap();

    let loaded = repo.get_post(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.user_id, author.id);
    assert_eq!(loaded.title, "hello");
    assert_eq!(loaded.body, "first body");
    assert!(loaded.created_at > 0);
    assert!(repo.get_post(created.id + 1).unwrap().is_none());
}

#[test]
fn update_replaces_content_and_keeps_owner() {
    let conn = open_db_in_memory().unwrap();
    let author = users(&conn).create_user("ada").unwrap();
    let service = posts(&conn);
    let post = service.create_post(author.id, "draft", "").unwrap();

    let updated = service.update_post(post.id, "final", "done").unwrap();
    assert_eq!(updated.id, post.id);
    assert_eq!(updated.user_id, author.id);
    assert_eq!(updated.title, "final");
    assert_eq!(updated.body, "done");
    assert!(updated.updated_at >= post.updated_at);
}

#[test]
fn missing_rows_report_not_found() {
    let conn = open_db_in_memory().unwrap();

    let err = posts(&conn).update_post(404, "t", "b").unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "post", id: 404 }));

    let err = comments(&conn).delete_comment(9).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "comment", id: 9 }));

    let err = users(&conn).rename_user(3, "nobody").unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "user", id: 3 }));
    assert!(users(&conn).get_user(3).unwrap().is_none());
}

#[test]
fn post_for_unknown_user_is_rejected_by_store() {
    let conn = open_db_in_memory().unwrap();

    let err = posts(&conn).create_post(999, "orphan", "").unwrap_err();
    assert!(err.is_constraint_violation(), "unexpected error: {err}");
    assert!(posts(&conn).by_user(None).unwrap().is_empty());
}

#[test]
fn comment_requires_existing_post_and_user() {
    let conn = open_db_in_memory().unwrap();
    let author = users(&conn).create_user("ada").unwrap();
    let post = posts(&conn).create_post(author.id, "hello", "").unwrap();

    let missing_post = comments(&conn)
        .create_comment(post.id + 100, author.id, "where?")
        .unwrap_err();
    assert!(missing_post.is_constraint_violation());

    let missing_user = comments(&conn)
        .create_comment(post.id, author.id + 100, "who?")
        .unwrap_err();
    assert!(missing_user.is_constraint_violation());
}

#[test]
fn deleting_referenced_rows_fails_until_children_are_gone() {
    let conn = open_db_in_memory().unwrap();
    let author = users(&conn).create_user("ada").unwrap();
    let post = posts(&conn).create_post(author.id, "hello", "").unwrap();
    let comment = comments(&conn)
        .create_comment(post.id, author.id, "first!")
        .unwrap();

    assert!(posts(&conn).delete_post(post.id).unwrap_err().is_constraint_violation());
    assert!(users(&conn).delete_user(author.id).unwrap_err().is_constraint_violation());

    comments(&conn).delete_comment(comment.id).unwrap();
    posts(&conn).delete_post(post.id).unwrap();
    users(&conn).delete_user(author.id).unwrap();
    assert!(users(&conn).list_users(Page::default()).unwrap().is_empty());
}

#[test]
fn comment_update_and_rename_read_back() {
    let conn = open_db_in_memory().unwrap();
    let created = users(&conn).create_user("ada").unwrap();
    let author = users(&conn).rename_user(created.id, "Ada L.").unwrap();
    assert_eq!(author.id, created.id);
    assert_eq!(author.name, "Ada L.");

    let post = posts(&conn).create_post(author.id, "hello", "").unwrap();
    let comment = comments(&conn)
        .create_comment(post.id, author.id, "typo")
        .unwrap();
    let edited = comments(&conn).update_comment(comment.id, "fixed").unwrap();
    assert_eq!(edited.body, "fixed");
    assert_eq!(edited.post_id, post.id);

    let repo = SqliteCommentRepository::try_new(&conn).unwrap();
    assert_eq!(repo.get_comment(comment.id).unwrap(), Some(edited));
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqlitePostRepository::try_new(&conn).err().unwrap();
    assert!(matches!(err, RepoError::MissingRequiredTable("posts")));
}
