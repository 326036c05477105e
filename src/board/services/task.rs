//! Service layer for task creation, update and listing.

use crate::board::{
    domain::{Sprint, SprintId, Task, TaskChanges, TaskFields, TaskId, Username},
    filter::TaskFilter,
    ports::{RepositoryError, SprintRepository, TaskRepository, UserRepository},
    validation::{TaskProposal, ValidationError, validate_task},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The proposed task was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// The task to update does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Looks up the sprint and assignee a write refers to, runs the validation
/// rules, and persists only when every rule passes.
#[derive(Clone)]
pub struct TaskService<T, S, U, C>
where
    T: TaskRepository,
    S: SprintRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    sprints: Arc<S>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<T, S, U, C> TaskService<T, S, U, C>
where
    T: TaskRepository,
    S: SprintRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, sprints: Arc<S>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            sprints,
            users,
            clock,
        }
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the task is rejected or
    /// [`TaskServiceError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self))]
    pub async fn create_task(&self, fields: TaskFields) -> TaskServiceResult<Task> {
        let sprint = self.resolve_sprint(fields.sprint).await?;
        self.ensure_assignee_exists(fields.assigned.as_ref()).await?;

        let today = self.clock.utc().date_naive();
        let proposal = TaskProposal::create(&fields, sprint.as_ref());
        if let Err(err) = validate_task(&proposal, today) {
            tracing::debug!(reason = %err, "rejected new task");
            return Err(err.into());
        }

        let task = self
            .tasks
            .insert(&fields)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to store task"))?;
        tracing::info!(task_id = %task.id(), "created task");
        Ok(task)
    }

    /// Applies `changes` to a stored task after validating the result.
    ///
    /// Sprint rules only run when `changes` carries a sprint.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Validation`] when the change is rejected, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self))]
    pub async fn update_task(&self, id: TaskId, changes: TaskChanges) -> TaskServiceResult<Task> {
        let prior = self
            .tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        let proposed = prior.merged_with(&changes);

        let sprint_supplied = changes.sprint.is_some();
        let sprint = if sprint_supplied {
            self.resolve_sprint(proposed.sprint).await?
        } else {
            None
        };
        if let Some(Some(assignee)) = &changes.assigned {
            self.ensure_assignee_exists(Some(assignee)).await?;
        }

        let today = self.clock.utc().date_naive();
        let proposal = TaskProposal::update(&proposed, sprint.as_ref(), &prior, sprint_supplied);
        if let Err(err) = validate_task(&proposal, today) {
            tracing::debug!(task_id = %id, reason = %err, "rejected task update");
            return Err(err.into());
        }

        let updated = Task::from_fields(id, proposed);
        self.tasks
            .update(&updated)
            .await
            .inspect_err(|err| {
                tracing::error!(task_id = %id, error = %err, "failed to store task");
            })?;
        tracing::info!(task_id = %id, "updated task");
        Ok(updated)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when lookup fails.
    pub async fn find_task(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.tasks.find_by_id(id).await?)
    }

    /// Returns the tasks matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when lookup fails.
    pub async fn list_tasks(&self, filter: &TaskFilter) -> TaskServiceResult<Vec<Task>> {
        Ok(self.tasks.list(filter).await?)
    }

    /// Returns the tasks matching raw query-string pairs.
    ///
    /// A recognised parameter with an unusable value selects nothing rather
    /// than failing the request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when lookup fails.
    pub async fn list_tasks_from_query<'a, I>(&self, pairs: I) -> TaskServiceResult<Vec<Task>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        match TaskFilter::from_query_pairs(pairs) {
            Ok(filter) => self.list_tasks(&filter).await,
            Err(err) => {
                tracing::debug!(reason = %err, "invalid task filter, returning no tasks");
                Ok(Vec::new())
            }
        }
    }

    async fn resolve_sprint(&self, sprint: Option<SprintId>) -> TaskServiceResult<Option<Sprint>> {
        let Some(id) = sprint else {
            return Ok(None);
        };
        let found = self
            .sprints
            .find_by_id(id)
            .await?
            .ok_or(ValidationError::UnknownSprint(id))?;
        Ok(Some(found))
    }

    async fn ensure_assignee_exists(&self, assigned: Option<&Username>) -> TaskServiceResult<()> {
        let Some(username) = assigned else {
            return Ok(());
        };
        if self.users.find_by_username(username).await?.is_none() {
            return Err(ValidationError::UnknownAssignee(username.clone()).into());
        }
        Ok(())
    }
}
