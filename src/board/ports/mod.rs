//! Port contracts for the sprint board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services
//! and representations.

pub mod links;
pub mod repository;

pub use links::{Route, UrlResolver};
pub use repository::{
    RepositoryError, RepositoryResult, SprintRepository, TaskRepository, UserRepository,
};

#[cfg(test)]
pub use repository::{MockSprintRepository, MockTaskRepository, MockUserRepository};
