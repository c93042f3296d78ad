use postboard_core::db::open_db_in_memory;
use postboard_core::{
    CommentService, Page, PostService, SqliteCommentRepository, SqlitePostRepository,
};
use rusqlite::Connection;

/// Users 1 and 5, posts 10 and 20 (both by user 5), comments 1 -> post 10
/// and 2 -> post 20.
fn seeded() -> Connection {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO users (id, name) VALUES (1, 'ada'), (5, 'grace');
         INSERT INTO posts (id, user_id, title) VALUES (10, 5, 'first'), (20, 5, 'second');
         INSERT INTO comments (id, post_id, user_id, body) VALUES
            (1, 10, 1, 'nice'),
            (2, 20, 1, 'also nice');",
    )
    .unwrap();
    conn
}

fn ids<T>(rows: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    rows.iter().map(id).collect()
}

#[test]
fn by_post_with_matching_id_returns_only_that_posts_comments() {
    let conn = seeded();
    let service = CommentService::new(SqliteCommentRepository::try_new(&conn).unwrap());

    let comments = service.by_post(Some(10)).unwrap();
    assert_eq!(ids(&comments, |c| c.id), vec![1]);
    assert!(comments.iter().all(|c| c.post_id == 10));
}

#[test]
fn by_post_without_id_returns_every_comment() {
    let conn = seeded();
    let service = CommentService::new(SqliteCommentRepository::try_new(&conn).unwrap());

    let comments = service.by_post(None).unwrap();
    assert_eq!(ids(&comments, |c| c.id), vec![1, 2]);
}

#[test]
fn by_post_with_unknown_id_is_empty_not_an_error() {
    let conn = seeded();
    let service = CommentService::new(SqliteCommentRepository::try_new(&conn).unwrap());

    assert!(service.by_post(Some(99)).unwrap().is_empty());
}

#[test]
fn by_user_returns_owned_posts_or_nothing() {
    let conn = seeded();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());

    assert_eq!(ids(&service.by_user(Some(5)).unwrap(), |p| p.id), vec![10, 20]);
    assert!(service.by_user(Some(6)).unwrap().is_empty());
    assert!(service.by_user(Some(1)).unwrap().is_empty());
}

#[test]
fn by_user_without_id_returns_every_post() {
    let conn = seeded();
    conn.execute(
        "INSERT INTO posts (id, user_id, title) VALUES (30, 1, 'third');",
        [],
    )
    .unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());

    assert_eq!(
        ids(&service.by_user(None).unwrap(), |p| p.id),
        vec![10, 20, 30]
    );
}

#[test]
fn scoped_lists_respect_page_window() {
    let conn = seeded();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());

    let second_only = service
        .list_posts(
            Some(5),
            Page {
                limit: Some(1),
                offset: 1,
            },
        )
        .unwrap();
    assert_eq!(ids(&second_only, |p| p.id), vec![20]);

    let skipped = service
        .list_posts(
            None,
            Page {
                limit: None,
                offset: 1,
            },
        )
        .unwrap();
    assert_eq!(ids(&skipped, |p| p.id), vec![20]);
}
