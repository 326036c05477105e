//! `PostgreSQL` adapters for board persistence.
//!
//! The schema lives in `migrations/`; tasks reference sprints by id and
//! users by username.

mod models;
mod repository;
mod schema;

pub use repository::{
    BoardPgPool, PostgresSprintRepository, PostgresTaskRepository, PostgresUserRepository,
};
