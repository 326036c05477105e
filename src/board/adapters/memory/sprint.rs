//! In-memory sprint store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::board::{
    domain::{Sprint, SprintFields, SprintId},
    ports::{RepositoryError, RepositoryResult, SprintRepository},
};

/// Thread-safe in-memory sprint store with sequential identifiers.
#[derive(Debug, Clone, Default)]
pub struct InMemorySprintRepository {
    state: Arc<RwLock<InMemorySprintState>>,
}

#[derive(Debug, Default)]
struct InMemorySprintState {
    last_id: i64,
    sprints: BTreeMap<SprintId, Sprint>,
}

impl InMemorySprintRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SprintRepository for InMemorySprintRepository {
    async fn insert(&self, fields: &SprintFields) -> RepositoryResult<Sprint> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.last_id += 1;
        let sprint = Sprint::from_fields(SprintId::new(state.last_id), fields.clone());
        state.sprints.insert(sprint.id(), sprint.clone());
        Ok(sprint)
    }

    async fn update(&self, sprint: &Sprint) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let stored = state
            .sprints
            .get_mut(&sprint.id())
            .ok_or(RepositoryError::SprintNotFound(sprint.id()))?;
        *stored = sprint.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: SprintId) -> RepositoryResult<Option<Sprint>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.sprints.get(&id).cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<Sprint>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let mut sprints: Vec<Sprint> = state.sprints.values().cloned().collect();
        sprints.sort_by_key(Sprint::end);
        Ok(sprints)
    }
}
