//! Task records and partial task updates.

use super::{SprintId, TaskId, TaskStatus, Username};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Writable task attributes, as proposed by a client or loaded from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Short task name.
    pub name: String,
    /// Free-text description; may be blank.
    pub description: String,
    /// Sprint the task is planned into; `None` keeps it in the backlog.
    pub sprint: Option<SprintId>,
    /// Current progress.
    pub status: TaskStatus,
    /// Position of the task within its list.
    pub order: i32,
    /// Username of the assignee.
    pub assigned: Option<Username>,
    /// Day work started.
    pub started: Option<NaiveDate>,
    /// Day the task is due.
    pub due: Option<NaiveDate>,
    /// Day work completed.
    pub completed: Option<NaiveDate>,
}

impl TaskFields {
    /// Creates a backlog task that has not been started.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Plans the task into a sprint.
    #[must_use]
    pub const fn with_sprint(mut self, sprint: SprintId) -> Self {
        self.sprint = Some(sprint);
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the ordering position.
    #[must_use]
    pub const fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Assigns the task to a user.
    #[must_use]
    pub fn with_assigned(mut self, assigned: Username) -> Self {
        self.assigned = Some(assigned);
        self
    }

    /// Sets the start date.
    #[must_use]
    pub const fn with_started(mut self, started: NaiveDate) -> Self {
        self.started = Some(started);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    /// Sets the completion date.
    #[must_use]
    pub const fn with_completed(mut self, completed: NaiveDate) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns whether the task sits in the backlog.
    #[must_use]
    pub const fn is_backlog(&self) -> bool {
        self.sprint.is_none()
    }
}

/// Stored task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    fields: TaskFields,
}

impl Task {
    /// Binds stored attributes to their identifier.
    #[must_use]
    pub const fn from_fields(id: TaskId, fields: TaskFields) -> Self {
        Self { id, fields }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    /// Returns the sprint reference, if any.
    #[must_use]
    pub const fn sprint(&self) -> Option<SprintId> {
        self.fields.sprint
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.fields.status
    }

    /// Returns the ordering position.
    #[must_use]
    pub const fn order(&self) -> i32 {
        self.fields.order
    }

    /// Returns the assignee's username, if any.
    #[must_use]
    pub const fn assigned(&self) -> Option<&Username> {
        self.fields.assigned.as_ref()
    }

    /// Returns the start date, if any.
    #[must_use]
    pub const fn started(&self) -> Option<NaiveDate> {
        self.fields.started
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due(&self) -> Option<NaiveDate> {
        self.fields.due
    }

    /// Returns the completion date, if any.
    #[must_use]
    pub const fn completed(&self) -> Option<NaiveDate> {
        self.fields.completed
    }

    /// Returns whether the task sits in the backlog.
    #[must_use]
    pub const fn is_backlog(&self) -> bool {
        self.fields.is_backlog()
    }

    /// Returns the writable attributes.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns the attributes that result from applying `changes`.
    #[must_use]
    pub fn merged_with(&self, changes: &TaskChanges) -> TaskFields {
        let current = &self.fields;
        TaskFields {
            name: changes.name.clone().unwrap_or_else(|| current.name.clone()),
            description: changes
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            sprint: changes.sprint.unwrap_or(current.sprint),
            status: changes.status.unwrap_or(current.status),
            order: changes.order.unwrap_or(current.order),
            assigned: changes
                .assigned
                .clone()
                .unwrap_or_else(|| current.assigned.clone()),
            started: changes.started.unwrap_or(current.started),
            due: changes.due.unwrap_or(current.due),
            completed: changes.completed.unwrap_or(current.completed),
        }
    }
}

/// Partial update of a task.
///
/// The outer `Option` of each field tells whether the field was supplied;
/// for nullable fields the inner `Option` carries the new value, so
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement sprint reference.
    pub sprint: Option<Option<SprintId>>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement ordering position.
    pub order: Option<i32>,
    /// Replacement assignee.
    pub assigned: Option<Option<Username>>,
    /// Replacement start date.
    pub started: Option<Option<NaiveDate>>,
    /// Replacement due date.
    pub due: Option<Option<NaiveDate>>,
    /// Replacement completion date.
    pub completed: Option<Option<NaiveDate>>,
}

impl TaskChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the change set replacing every field with `fields`.
    #[must_use]
    pub fn replacing(fields: TaskFields) -> Self {
        Self {
            name: Some(fields.name),
            description: Some(fields.description),
            sprint: Some(fields.sprint),
            status: Some(fields.status),
            order: Some(fields.order),
            assigned: Some(fields.assigned),
            started: Some(fields.started),
            due: Some(fields.due),
            completed: Some(fields.completed),
        }
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Moves the task to a sprint, or to the backlog with `None`.
    #[must_use]
    pub const fn with_sprint(mut self, sprint: Option<SprintId>) -> Self {
        self.sprint = Some(sprint);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the ordering position.
    #[must_use]
    pub const fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Reassigns the task, or unassigns it with `None`.
    #[must_use]
    pub fn with_assigned(mut self, assigned: Option<Username>) -> Self {
        self.assigned = Some(assigned);
        self
    }

    /// Replaces or clears the start date.
    #[must_use]
    pub const fn with_started(mut self, started: Option<NaiveDate>) -> Self {
        self.started = Some(started);
        self
    }

    /// Replaces or clears the due date.
    #[must_use]
    pub const fn with_due(mut self, due: Option<NaiveDate>) -> Self {
        self.due = Some(due);
        self
    }

    /// Replaces or clears the completion date.
    #[must_use]
    pub const fn with_completed(mut self, completed: Option<NaiveDate>) -> Self {
        self.completed = Some(completed);
        self
    }
}
