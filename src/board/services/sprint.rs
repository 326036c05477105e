//! Service layer for sprint creation, update and lookup.

use crate::board::{
    domain::{Sprint, SprintChanges, SprintFields, SprintId},
    ports::{RepositoryError, SprintRepository},
    validation::{ValidationError, validate_sprint},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for sprint operations.
#[derive(Debug, Error)]
pub enum SprintServiceError {
    /// The proposed sprint was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// The sprint to update does not exist.
    #[error("sprint not found: {0}")]
    NotFound(SprintId),
}

/// Result type for sprint service operations.
pub type SprintServiceResult<T> = Result<T, SprintServiceError>;

/// Sprint orchestration service.
#[derive(Clone)]
pub struct SprintService<S, C>
where
    S: SprintRepository,
    C: Clock + Send + Sync,
{
    sprints: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> SprintService<S, C>
where
    S: SprintRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new sprint service.
    #[must_use]
    pub const fn new(sprints: Arc<S>, clock: Arc<C>) -> Self {
        Self { sprints, clock }
    }

    /// Validates and stores a new sprint.
    ///
    /// # Errors
    ///
    /// Returns [`SprintServiceError::Validation`] when the sprint is rejected
    /// or [`SprintServiceError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self))]
    pub async fn create_sprint(&self, fields: SprintFields) -> SprintServiceResult<Sprint> {
        let today = self.clock.utc().date_naive();
        if let Err(err) = validate_sprint(&fields, None, today) {
            tracing::debug!(reason = %err, "rejected new sprint");
            return Err(err.into());
        }
        let sprint = self
            .sprints
            .insert(&fields)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to store sprint"))?;
        tracing::info!(sprint_id = %sprint.id(), "created sprint");
        Ok(sprint)
    }

    /// Applies `changes` to a stored sprint after validating the result.
    ///
    /// # Errors
    ///
    /// Returns [`SprintServiceError::NotFound`] when the sprint does not
    /// exist, [`SprintServiceError::Validation`] when the change is rejected,
    /// or [`SprintServiceError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self))]
    pub async fn update_sprint(
        &self,
        id: SprintId,
        changes: SprintChanges,
    ) -> SprintServiceResult<Sprint> {
        let prior = self
            .sprints
            .find_by_id(id)
            .await?
            .ok_or(SprintServiceError::NotFound(id))?;
        let proposed = prior.merged_with(&changes);
        let today = self.clock.utc().date_naive();
        if let Err(err) = validate_sprint(&proposed, Some(&prior), today) {
            tracing::debug!(sprint_id = %id, reason = %err, "rejected sprint update");
            return Err(err.into());
        }
        let updated = Sprint::from_fields(id, proposed);
        self.sprints
            .update(&updated)
            .await
            .inspect_err(|err| {
                tracing::error!(sprint_id = %id, error = %err, "failed to store sprint");
            })?;
        tracing::info!(sprint_id = %id, "updated sprint");
        Ok(updated)
    }

    /// Retrieves a sprint by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SprintServiceError::Repository`] when lookup fails.
    pub async fn find_sprint(&self, id: SprintId) -> SprintServiceResult<Option<Sprint>> {
        Ok(self.sprints.find_by_id(id).await?)
    }

    /// Returns all sprints ordered by end date.
    ///
    /// # Errors
    ///
    /// Returns [`SprintServiceError::Repository`] when lookup fails.
    pub async fn list_sprints(&self) -> SprintServiceResult<Vec<Sprint>> {
        Ok(self.sprints.list().await?)
    }
}
