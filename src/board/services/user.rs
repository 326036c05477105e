//! Read-only lookups of user accounts.

use crate::board::{
    domain::{User, Username},
    ports::{RepositoryResult, UserRepository},
};
use std::sync::Arc;

/// User lookup service.
#[derive(Clone)]
pub struct UserService<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Creates a new user service.
    #[must_use]
    pub const fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns a repository error when lookup fails.
    pub async fn find_user(&self, username: &Username) -> RepositoryResult<Option<User>> {
        self.users.find_by_username(username).await
    }

    /// Returns all users ordered by username.
    ///
    /// # Errors
    ///
    /// Returns a repository error when lookup fails.
    pub async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        self.users.list().await
    }
}
