//! Task representation.

use super::{Representable, RequestContext};
use crate::board::{
    domain::{SprintId, Task, TaskId, TaskStatus},
    ports::Route,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Links attached to a task representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskLinks {
    /// Address of the task itself.
    #[serde(rename = "self")]
    pub self_link: String,
    /// Address of the task's sprint; `null` for backlog tasks.
    pub sprint: Option<String>,
    /// Address of the assignee; `null` when unassigned.
    pub assigned: Option<String>,
}

/// Client-facing view of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRepresentation {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Sprint identifier, if planned.
    pub sprint: Option<SprintId>,
    /// Status value.
    pub status: TaskStatus,
    /// Human-readable status label.
    pub status_display: &'static str,
    /// Ordering position.
    pub order: i32,
    /// Assignee username.
    pub assigned: Option<String>,
    /// Start date.
    pub started: Option<NaiveDate>,
    /// Due date.
    pub due: Option<NaiveDate>,
    /// Completion date.
    pub completed: Option<NaiveDate>,
    /// Related resources.
    pub links: TaskLinks,
}

impl Representable for Task {
    type Representation = TaskRepresentation;

    fn represent(&self, context: &RequestContext<'_>) -> TaskRepresentation {
        let links = TaskLinks {
            self_link: context.link(Route::TaskDetail(self.id())),
            sprint: self
                .sprint()
                .map(|sprint| context.link(Route::SprintDetail(sprint))),
            assigned: self
                .assigned()
                .map(|username| context.link(Route::UserDetail(username))),
        };
        TaskRepresentation {
            id: self.id(),
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            sprint: self.sprint(),
            status: self.status(),
            status_display: self.status().display_label(),
            order: self.order(),
            assigned: self.assigned().map(|username| username.as_str().to_owned()),
            started: self.started(),
            due: self.due(),
            completed: self.completed(),
            links,
        }
    }
}
