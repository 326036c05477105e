//! Domain model for the sprint board.
//!
//! Users are read-only references; sprints and tasks are the records clients
//! create and update. Identifiers are assigned by the record store, so values
//! that have not been stored yet travel as [`SprintFields`] and
//! [`TaskFields`].

mod error;
mod ids;
mod sprint;
mod status;
mod task;
mod user;

pub use error::{BoardDomainError, ParseTaskStatusError};
pub use ids::{SprintId, TaskId, UserId, Username};
pub use sprint::{Sprint, SprintChanges, SprintFields};
pub use status::TaskStatus;
pub use task::{Task, TaskChanges, TaskFields};
pub use user::User;
