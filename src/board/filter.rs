//! Task selection by sprint, status, assignee and backlog membership.

use crate::board::domain::{SprintId, Task, TaskStatus, Username};
use thiserror::Error;

/// Error raised when a recognised query parameter carries an unusable value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The `sprint` parameter is not an integer.
    #[error("invalid sprint filter '{0}', expected an integer id")]
    InvalidSprint(String),
    /// The `status` parameter names no known status.
    #[error("invalid status filter '{0}'")]
    InvalidStatus(String),
    /// The `assigned` parameter is not a valid username.
    #[error("invalid assigned filter '{0}'")]
    InvalidAssigned(String),
}

/// Criteria selecting a subset of tasks; every supplied criterion must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Only tasks planned into this sprint.
    pub sprint: Option<SprintId>,
    /// Only tasks with this status.
    pub status: Option<TaskStatus>,
    /// Only tasks assigned to this username.
    pub assigned: Option<Username>,
    /// `Some(true)` selects backlog tasks, `Some(false)` planned tasks.
    pub backlog: Option<bool>,
}

impl TaskFilter {
    /// Creates a filter that selects every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the selection to one sprint.
    #[must_use]
    pub const fn with_sprint(mut self, sprint: SprintId) -> Self {
        self.sprint = Some(sprint);
        self
    }

    /// Restricts the selection to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the selection to one assignee.
    #[must_use]
    pub fn with_assigned(mut self, assigned: Username) -> Self {
        self.assigned = Some(assigned);
        self
    }

    /// Restricts the selection to backlog (`true`) or planned (`false`) tasks.
    #[must_use]
    pub const fn with_backlog(mut self, backlog: bool) -> Self {
        self.backlog = Some(backlog);
        self
    }

    /// Builds a filter from raw query-string pairs.
    ///
    /// Unrecognised keys and empty values are ignored. `backlog` accepts
    /// `true`/`1` and `false`/`0` in either case; anything else leaves the
    /// criterion unset. When a key repeats, the last value wins.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] when `sprint`, `status` or `assigned`
    /// carries a value that cannot be parsed.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filter = Self::default();
        for (key, raw_value) in pairs {
            let value = raw_value.trim();
            if value.is_empty() {
                continue;
            }
            match key {
                "sprint" => {
                    let id = value
                        .parse::<i64>()
                        .map_err(|_| FilterError::InvalidSprint(value.to_owned()))?;
                    filter.sprint = Some(SprintId::new(id));
                }
                "status" => {
                    let status = TaskStatus::try_from(value)
                        .map_err(|_| FilterError::InvalidStatus(value.to_owned()))?;
                    filter.status = Some(status);
                }
                "assigned" => {
                    let username = Username::new(value)
                        .map_err(|_| FilterError::InvalidAssigned(value.to_owned()))?;
                    filter.assigned = Some(username);
                }
                "backlog" => filter.backlog = parse_flag(value),
                _ => {}
            }
        }
        Ok(filter)
    }

    /// Returns whether `task` satisfies every supplied criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.sprint.is_none_or(|sprint| task.sprint() == Some(sprint))
            && self.status.is_none_or(|status| task.status() == status)
            && self
                .assigned
                .as_ref()
                .is_none_or(|assigned| task.assigned() == Some(assigned))
            && self
                .backlog
                .is_none_or(|backlog| task.is_backlog() == backlog)
    }

    /// Returns the matching tasks in their original order.
    #[must_use]
    pub fn apply<I>(&self, tasks: I) -> Vec<Task>
    where
        I: IntoIterator<Item = Task>,
    {
        tasks.into_iter().filter(|task| self.matches(task)).collect()
    }

    /// Returns whether no criterion is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sprint.is_none()
            && self.status.is_none()
            && self.assigned.is_none()
            && self.backlog.is_none()
    }

    /// Renders the supplied criteria as a query string without the leading
    /// `?`, in `sprint`, `status`, `assigned`, `backlog` order.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        if let Some(sprint) = self.sprint {
            parts.push(format!("sprint={sprint}"));
        }
        if let Some(status) = self.status {
            parts.push(format!("status={status}"));
        }
        if let Some(assigned) = &self.assigned {
            parts.push(format!("assigned={assigned}"));
        }
        if let Some(backlog) = self.backlog {
            parts.push(format!("backlog={backlog}"));
        }
        parts.join("&")
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" | "True" | "1" => Some(true),
        "false" | "False" | "0" => Some(false),
        _ => None,
    }
}
