//! In-memory record stores for tests and embedding.

mod sprint;
mod task;
mod user;

pub use sprint::InMemorySprintRepository;
pub use task::InMemoryTaskRepository;
pub use user::InMemoryUserRepository;

use crate::board::ports::RepositoryError;

/// Maps a poisoned lock into a persistence error.
fn lock_error(err: &impl std::fmt::Display) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}
