//! User use-case service.

use crate::model::user::{NewUser, User};
use crate::model::UserId;
use crate::repo::user_repo::{UserListQuery, UserRepository};
use crate::repo::{Page, RepoError, RepoResult};

/// User service facade over a repository implementation.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_user(&self, name: impl Into<String>) -> RepoResult<User> {
        self.repo.create_user(&NewUser::new(name))
    }

    pub fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        self.repo.get_user(id)
    }

    /// Like [`Self::get_user`] but a missing row is `NotFound`.
    pub fn find_user(&self, id: UserId) -> RepoResult<User> {
        self.repo
            .get_user(id)?
            .ok_or(RepoError::NotFound { entity: "user", id })
    }

    pub fn list_users(&self, page: Page) -> RepoResult<Vec<User>> {
        self.repo.list_users(&UserListQuery { page })
    }

    pub fn rename_user(&self, id: UserId, name: impl Into<String>) -> RepoResult<User> {
        let name = name.into();
        self.repo.rename_user(id, name.as_str())?;
        self.find_user(id)
    }

    pub fn delete_user(&self, id: UserId) -> RepoResult<()> {
        self.repo.delete_user(id)
    }
}
