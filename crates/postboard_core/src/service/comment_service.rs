//! Comment use-case service.
//!
//! # Invariants
//! - `by_post(None)` returns every comment; `by_post(Some(id))` only the
//!   comments on that post, possibly none.

use crate::model::comment::{Comment, NewComment};
use crate::model::{CommentId, PostId, UserId};
use crate::repo::comment_repo::{CommentListQuery, CommentRepository};
use crate::repo::{Page, RepoError, RepoResult};
use log::debug;

/// Comment service facade over a repository implementation.
pub struct CommentService<R: CommentRepository> {
    repo: R,
}

impl<R: CommentRepository> CommentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a comment by `user_id` on `post_id`.
    ///
    /// Unknown post or user ids surface as the store's constraint error.
    pub fn create_comment(
        &self,
        post_id: PostId,
        user_id: UserId,
        body: impl Into<String>,
    ) -> RepoResult<Comment> {
        self.repo
            .create_comment(&NewComment::new(post_id, user_id, body))
    }

    pub fn get_comment(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        self.repo.get_comment(id)
    }

    /// Like [`Self::get_comment`] but a missing row is `NotFound`.
    pub fn find_comment(&self, id: CommentId) -> RepoResult<Comment> {
        self.repo.get_comment(id)?.ok_or(RepoError::NotFound {
            entity: "comment",
            id,
        })
    }

    /// Comments on `post_id`; all comments when `post_id` is `None`.
    pub fn by_post(&self, post_id: Option<PostId>) -> RepoResult<Vec<Comment>> {
        self.list_comments(post_id, Page::default())
    }

    /// [`Self::by_post`] with a limit/offset window.
    pub fn list_comments(&self, post_id: Option<PostId>, page: Page) -> RepoResult<Vec<Comment>> {
        let query = CommentListQuery::by_post(post_id).with_page(page);
        let comments = self.repo.list_comments(&query)?;
        debug!(
            "event=scope_list module=service entity=comment scope=by_post active={} rows={}",
            query.post_scope.is_active(),
            comments.len()
        );
        Ok(comments)
    }

    /// Replaces the body; returns the stored row.
    pub fn update_comment(&self, id: CommentId, body: impl Into<String>) -> RepoResult<Comment> {
        let body = body.into();
        self.repo.update_comment(id, body.as_str())?;
        self.find_comment(id)
    }

    pub fn delete_comment(&self, id: CommentId) -> RepoResult<()> {
        self.repo.delete_comment(id)
    }
}
