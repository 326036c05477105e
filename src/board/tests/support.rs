//! Shared fixtures for board unit tests.

use crate::board::domain::{Sprint, SprintFields, SprintId, Task, TaskFields, TaskId, Username};
use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;

/// Builds a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// The day every unit test runs on.
pub fn today() -> NaiveDate {
    date(2030, 6, 15)
}

/// Clock pinned to noon UTC on a given day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock reading noon UTC on `day`.
    pub fn on(day: NaiveDate) -> Self {
        let noon = day.and_hms_opt(12, 0, 0).expect("valid time of day");
        Self(noon.and_utc())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a stored sprint ending on `end`.
pub fn sprint(id: i64, end: NaiveDate) -> Sprint {
    Sprint::from_fields(
        SprintId::new(id),
        SprintFields::new(end).with_name(format!("Sprint {id}")),
    )
}

/// Builds a stored task from `fields`.
pub fn task(id: i64, fields: TaskFields) -> Task {
    Task::from_fields(TaskId::new(id), fields)
}

/// Builds a username, panicking on invalid input.
pub fn username(value: &str) -> Username {
    Username::new(value).expect("valid username")
}
