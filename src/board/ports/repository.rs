//! Repository ports for user, sprint and task records.

use crate::board::{
    domain::{Sprint, SprintFields, SprintId, Task, TaskFields, TaskId, User, Username},
    filter::TaskFilter,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read access to externally managed user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by unique username.
    ///
    /// Returns `None` when no such user exists.
    async fn find_by_username(&self, username: &Username) -> RepositoryResult<Option<User>>;

    /// Returns all users ordered by username.
    async fn list(&self) -> RepositoryResult<Vec<User>>;
}

/// Sprint persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SprintRepository: Send + Sync {
    /// Stores a new sprint and returns it with its assigned identifier.
    async fn insert(&self, fields: &SprintFields) -> RepositoryResult<Sprint>;

    /// Replaces the stored attributes of an existing sprint.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::SprintNotFound`] when the sprint does not
    /// exist.
    async fn update(&self, sprint: &Sprint) -> RepositoryResult<()>;

    /// Finds a sprint by identifier.
    ///
    /// Returns `None` when the sprint does not exist.
    async fn find_by_id(&self, id: SprintId) -> RepositoryResult<Option<Sprint>>;

    /// Returns all sprints ordered by end date.
    async fn list(&self) -> RepositoryResult<Vec<Sprint>>;
}

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    async fn insert(&self, fields: &TaskFields) -> RepositoryResult<Task>;

    /// Replaces the stored attributes of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> RepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns the tasks matching `filter`, ordered by `order` then name.
    async fn list(&self, filter: &TaskFilter) -> RepositoryResult<Vec<Task>>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The sprint was not found.
    #[error("sprint not found: {0}")]
    SprintNotFound(SprintId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
