//! Port for turning resource routes into addresses.

use crate::board::domain::{SprintId, TaskId, Username};

/// Named route of a board resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// A single user, keyed by username.
    UserDetail(&'a Username),
    /// A single sprint.
    SprintDetail(SprintId),
    /// A single task.
    TaskDetail(TaskId),
    /// The task collection.
    TaskList,
}

/// Route reversal provided by the hosting web layer.
pub trait UrlResolver: Send + Sync {
    /// Returns the canonical address of `route`.
    fn reverse(&self, route: Route<'_>) -> String;
}
