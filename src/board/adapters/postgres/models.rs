//! Diesel row models for board persistence.

use super::schema::{sprints, tasks, users};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Internal user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether the account is active.
    pub is_active: bool,
}

/// Query result row for sprint records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sprints)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SprintRow {
    /// Internal sprint identifier.
    pub id: i64,
    /// Sprint name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Last day of the sprint.
    pub end_date: NaiveDate,
}

/// Insert and update model for sprint records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = sprints)]
pub struct SprintRecord {
    /// Sprint name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Last day of the sprint.
    pub end_date: NaiveDate,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Sprint reference.
    pub sprint_id: Option<i64>,
    /// Canonical status string.
    pub status: String,
    /// Ordering position.
    pub sort_order: i32,
    /// Assignee username.
    pub assigned: Option<String>,
    /// Start date.
    pub started: Option<NaiveDate>,
    /// Due date.
    pub due: Option<NaiveDate>,
    /// Completion date.
    pub completed: Option<NaiveDate>,
}

/// Insert and update model for task records.
///
/// Absent optional values are written as `NULL` so that updates can clear
/// them.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskRecord {
    /// Task name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Sprint reference.
    pub sprint_id: Option<i64>,
    /// Canonical status string.
    pub status: String,
    /// Ordering position.
    pub sort_order: i32,
    /// Assignee username.
    pub assigned: Option<String>,
    /// Start date.
    pub started: Option<NaiveDate>,
    /// Due date.
    pub due: Option<NaiveDate>,
    /// Completion date.
    pub completed: Option<NaiveDate>,
}
