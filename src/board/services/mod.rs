//! Application services running the lookup, validate and save cycle.

mod sprint;
mod task;
mod user;

pub use sprint::{SprintService, SprintServiceError, SprintServiceResult};
pub use task::{TaskService, TaskServiceError, TaskServiceResult};
pub use user::UserService;
