//! Association traversal between users, posts and comments.
//!
//! Each association is a second lookup through the related repository:
//!
//! | From    | Association | Kind       | Lookup                         |
//! |---------|-------------|------------|--------------------------------|
//! | Post    | user        | belongs-to | `users.id = post.user_id`      |
//! | Post    | comments    | has-many   | `comments.post_id = post.id`   |
//! | Comment | post        | belongs-to | `posts.id = comment.post_id`   |
//! | Comment | user        | belongs-to | `users.id = comment.user_id`   |
//! | User    | posts       | has-many   | `posts.user_id = user.id`      |
//! | User    | comments    | has-many   | `comments.user_id = user.id`   |
//!
//! # Invariants
//! - A belongs-to target that does not exist is `RepoError::NotFound`; with
//!   foreign keys enforced this only happens for rows written without them.
//! - Has-many results follow the repository order (`id ASC`).

use crate::model::comment::Comment;
use crate::model::post::Post;
use crate::model::user::User;
use crate::repo::comment_repo::{CommentListQuery, CommentRepository};
use crate::repo::post_repo::{PostListQuery, PostRepository};
use crate::repo::user_repo::UserRepository;
use crate::repo::{RepoError, RepoResult};

/// `post.user`
pub fn post_author(users: &impl UserRepository, post: &Post) -> RepoResult<User> {
    belongs_to_user(users, post.user_id)
}

/// `post.comments`
pub fn post_comments(comments: &impl CommentRepository, post: &Post) -> RepoResult<Vec<Comment>> {
    comments.list_comments(&CommentListQuery::by_post(Some(post.id)))
}

/// `comment.post`
pub fn comment_post(posts: &impl PostRepository, comment: &Comment) -> RepoResult<Post> {
    posts.get_post(comment.post_id)?.ok_or(RepoError::NotFound {
        entity: "post",
        id: comment.post_id,
    })
}

/// `comment.user`
pub fn comment_author(users: &impl UserRepository, comment: &Comment) -> RepoResult<User> {
    belongs_to_user(users, comment.user_id)
}

/// `user.posts`
pub fn user_posts(posts: &impl PostRepository, user: &User) -> RepoResult<Vec<Post>> {
    posts.list_posts(&PostListQuery::by_user(Some(user.id)))
}

/// `user.comments`
pub fn user_comments(comments: &impl CommentRepository, user: &User) -> RepoResult<Vec<Comment>> {
    comments.list_comments(&CommentListQuery::by_user(Some(user.id)))
}

fn belongs_to_user(users: &impl UserRepository, user_id: i64) -> RepoResult<User> {
    users.get_user(user_id)?.ok_or(RepoError::NotFound {
        entity: "user",
        id: user_id,
    })
}
