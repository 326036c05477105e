//! Task validation rules.
//!
//! Field rules run first, in declaration order; the cross-field rules then
//! run against the complete proposed record.

use super::{ValidationError, validate_name_length};
use crate::board::domain::{Sprint, Task, TaskFields, TaskStatus};
use chrono::NaiveDate;

/// A proposed task together with the records its rules depend on.
#[derive(Debug, Clone, Copy)]
pub struct TaskProposal<'a> {
    /// Complete proposed attributes (merged with the prior record on update).
    pub fields: &'a TaskFields,
    /// Sprint record referenced by `fields.sprint`, resolved by the caller.
    pub sprint: Option<&'a Sprint>,
    /// Stored record being updated; `None` on create.
    pub prior: Option<&'a Task>,
    /// Whether the request supplied the sprint field.
    pub sprint_supplied: bool,
}

impl<'a> TaskProposal<'a> {
    /// Describes a task about to be created.
    #[must_use]
    pub const fn create(fields: &'a TaskFields, sprint: Option<&'a Sprint>) -> Self {
        Self {
            fields,
            sprint,
            prior: None,
            sprint_supplied: true,
        }
    }

    /// Describes an update of `prior` resulting in `fields`.
    #[must_use]
    pub const fn update(
        fields: &'a TaskFields,
        sprint: Option<&'a Sprint>,
        prior: &'a Task,
        sprint_supplied: bool,
    ) -> Self {
        Self {
            fields,
            sprint,
            prior: Some(prior),
            sprint_supplied,
        }
    }
}

/// Validates that a task name is present and fits the column width.
///
/// # Errors
///
/// Returns [`ValidationError::BlankName`] or [`ValidationError::NameTooLong`].
pub fn validate_task_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    validate_name_length(name)
}

/// Validates the sprint a task is planned into.
///
/// A finished task keeps its sprint, and no task may join a sprint that has
/// already ended. Backlog tasks are exempt from the second rule.
///
/// # Errors
///
/// Returns [`ValidationError::SprintOfCompletedTask`] or
/// [`ValidationError::PastSprint`].
pub fn validate_task_sprint(
    sprint: Option<&Sprint>,
    status: TaskStatus,
    prior: Option<&Task>,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if let Some(prior_task) = prior {
        let moved = prior_task.sprint() != sprint.map(Sprint::id);
        if moved && status == TaskStatus::Done {
            return Err(ValidationError::SprintOfCompletedTask);
        }
    }
    if sprint.is_some_and(|planned| planned.has_ended(today)) {
        return Err(ValidationError::PastSprint);
    }
    Ok(())
}

/// Rejects backlog tasks that have left the not-started status.
///
/// # Errors
///
/// Returns [`ValidationError::BacklogTaskStarted`].
pub fn validate_backlog_status(fields: &TaskFields) -> Result<(), ValidationError> {
    if fields.is_backlog() && fields.status != TaskStatus::NotStarted {
        return Err(ValidationError::BacklogTaskStarted);
    }
    Ok(())
}

/// Rejects a start date on a task that has not started.
///
/// # Errors
///
/// Returns [`ValidationError::StartDateOnNotStartedTask`].
pub fn validate_start_date(fields: &TaskFields) -> Result<(), ValidationError> {
    if fields.started.is_some() && fields.status == TaskStatus::NotStarted {
        return Err(ValidationError::StartDateOnNotStartedTask);
    }
    Ok(())
}

/// Requires the completion date to be set exactly when the task is done.
///
/// # Errors
///
/// Returns [`ValidationError::CompletedDateOnIncompleteTask`] or
/// [`ValidationError::MissingCompletedDate`].
pub fn validate_completed_date(fields: &TaskFields) -> Result<(), ValidationError> {
    match (fields.completed, fields.status) {
        (Some(_), status) if status != TaskStatus::Done => {
            Err(ValidationError::CompletedDateOnIncompleteTask)
        }
        (None, TaskStatus::Done) => Err(ValidationError::MissingCompletedDate),
        _ => Ok(()),
    }
}

/// Runs the cross-field rules against a complete task.
///
/// # Errors
///
/// Returns the first failing rule's [`ValidationError`].
pub fn validate_task_consistency(fields: &TaskFields) -> Result<(), ValidationError> {
    validate_backlog_status(fields)?;
    validate_start_date(fields)?;
    validate_completed_date(fields)
}

/// Validates a proposed task.
///
/// The sprint rules only run when the request supplied a sprint, so updates
/// that leave the sprint alone are not blocked by a sprint that has since
/// ended.
///
/// # Errors
///
/// Returns the first [`ValidationError`] raised by the task rules.
pub fn validate_task(proposal: &TaskProposal<'_>, today: NaiveDate) -> Result<(), ValidationError> {
    let fields = proposal.fields;
    validate_task_name(&fields.name)?;
    if proposal.sprint_supplied {
        validate_task_sprint(proposal.sprint, fields.status, proposal.prior, today)?;
    }
    validate_task_consistency(fields)
}
