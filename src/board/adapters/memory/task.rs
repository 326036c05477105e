//! In-memory task store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::board::{
    domain::{Task, TaskFields, TaskId},
    filter::TaskFilter,
    ports::{RepositoryError, RepositoryResult, TaskRepository},
};

/// Thread-safe in-memory task store with sequential identifiers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    last_id: i64,
    tasks: BTreeMap<TaskId, Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, fields: &TaskFields) -> RepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.last_id += 1;
        let task = Task::from_fields(TaskId::new(state.last_id), fields.clone());
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(RepositoryError::TaskNotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self, filter: &TaskFilter) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let mut tasks = filter.apply(state.tasks.values().cloned());
        tasks.sort_by(|left, right| {
            left.order()
                .cmp(&right.order())
                .then_with(|| left.name().cmp(right.name()))
        });
        Ok(tasks)
    }
}
