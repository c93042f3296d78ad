//! Post use-case service.
//!
//! # Invariants
//! - `by_user(None)` returns every post; `by_user(Some(id))` only that
//!   user's posts, possibly none.

use crate::model::post::{NewPost, Post};
use crate::model::{PostId, UserId};
use crate::repo::post_repo::{PostListQuery, PostRepository};
use crate::repo::{Page, RepoError, RepoResult};
use log::debug;

/// Post service facade over a repository implementation.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Publishes a post for `user_id`.
    ///
    /// An unknown `user_id` surfaces as the store's constraint error.
    pub fn create_post(
        &self,
        user_id: UserId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> RepoResult<Post> {
        let post = NewPost::new(user_id, title).with_body(body);
        self.repo.create_post(&post)
    }

    pub fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    /// Like [`Self::get_post`] but a missing row is `NotFound`.
    pub fn find_post(&self, id: PostId) -> RepoResult<Post> {
        self.repo
            .get_post(id)?
            .ok_or(RepoError::NotFound { entity: "post", id })
    }

    /// Posts owned by `user_id`; all posts when `user_id` is `None`.
    pub fn by_user(&self, user_id: Option<UserId>) -> RepoResult<Vec<Post>> {
        self.list_posts(user_id, Page::default())
    }

    /// [`Self::by_user`] with a limit/offset window.
    pub fn list_posts(&self, user_id: Option<UserId>, page: Page) -> RepoResult<Vec<Post>> {
        let query = PostListQuery::by_user(user_id).with_page(page);
        let posts = self.repo.list_posts(&query)?;
        debug!(
            "event=scope_list module=service entity=post scope=by_user active={} rows={}",
            query.user_scope.is_active(),
            posts.len()
        );
        Ok(posts)
    }

    /// Full replacement of title and body; returns the stored row.
    pub fn update_post(
        &self,
        id: PostId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> RepoResult<Post> {
        let title = title.into();
        let body = body.into();
        self.repo.update_post(id, title.as_str(), body.as_str())?;
        self.find_post(id)
    }

    pub fn delete_post(&self, id: PostId) -> RepoResult<()> {
        self.repo.delete_post(id)
    }
}
