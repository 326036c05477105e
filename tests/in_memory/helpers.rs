//! Shared fixtures for in-memory board integration tests.

use std::sync::Arc;

use chrono::{NaiveDate, TimeDelta, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use sprintboard::board::{
    adapters::memory::{InMemorySprintRepository, InMemoryTaskRepository, InMemoryUserRepository},
    domain::{User, UserId, Username},
    services::{SprintService, TaskService, UserService},
};

/// Task service wired to in-memory stores.
pub type MemoryTaskService = TaskService<
    InMemoryTaskRepository,
    InMemorySprintRepository,
    InMemoryUserRepository,
    DefaultClock,
>;

/// Services sharing one set of in-memory stores.
pub struct MemoryBoard {
    pub sprints: SprintService<InMemorySprintRepository, DefaultClock>,
    pub tasks: MemoryTaskService,
    pub users: UserService<InMemoryUserRepository>,
}

/// Builds a username, failing the test on invalid input.
pub fn username(value: &str) -> Result<Username, eyre::Report> {
    Username::new(value).map_err(|err| eyre::eyre!("invalid username {value}: {err}"))
}

/// Returns the date `days` away from today, in UTC.
pub fn days_from_today(days: i64) -> Result<NaiveDate, eyre::Report> {
    Utc::now()
        .date_naive()
        .checked_add_signed(TimeDelta::days(days))
        .ok_or_else(|| eyre::eyre!("date offset {days} out of range"))
}

/// Board with two active accounts, `alice` and `bob`.
#[fixture]
pub fn board() -> MemoryBoard {
    let accounts = [(1, "alice", "Alice", "Liddell"), (2, "bob", "Bob", "")]
        .into_iter()
        .filter_map(|(id, name, first, last)| {
            Username::new(name)
                .ok()
                .map(|parsed| User::new(UserId::new(id), parsed).with_name(first, last))
        });
    let users = Arc::new(InMemoryUserRepository::with_users(accounts));
    let sprint_store = Arc::new(InMemorySprintRepository::new());
    let clock = Arc::new(DefaultClock);

    MemoryBoard {
        sprints: SprintService::new(Arc::clone(&sprint_store), Arc::clone(&clock)),
        tasks: TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            sprint_store,
            Arc::clone(&users),
            clock,
        ),
        users: UserService::new(users),
    }
}
