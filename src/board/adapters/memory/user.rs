//! In-memory user directory.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::board::{
    domain::{User, Username},
    ports::{RepositoryResult, UserRepository},
};

/// Thread-safe in-memory user directory keyed by username.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<Username, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding `users`.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let entries = users
            .into_iter()
            .map(|user| (user.username().clone(), user))
            .collect();
        Self {
            users: Arc::new(RwLock::new(entries)),
        }
    }

    /// Adds or replaces a user account.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the directory lock is poisoned.
    pub fn insert(&self, user: User) -> RepositoryResult<()> {
        let mut users = self.users.write().map_err(|err| lock_error(&err))?;
        users.insert(user.username().clone(), user);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &Username) -> RepositoryResult<Option<User>> {
        let users = self.users.read().map_err(|err| lock_error(&err))?;
        Ok(users.get(username).cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<User>> {
        let users = self.users.read().map_err(|err| lock_error(&err))?;
        Ok(users.values().cloned().collect())
    }
}
