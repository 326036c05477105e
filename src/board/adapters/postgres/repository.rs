//! `PostgreSQL` repository implementations for board storage.

use super::{
    models::{SprintRecord, SprintRow, TaskRecord, TaskRow, UserRow},
    schema::{sprints, tasks, users},
};
use crate::board::{
    domain::{
        Sprint, SprintFields, SprintId, Task, TaskFields, TaskId, TaskStatus, User, UserId,
        Username,
    },
    filter::TaskFilter,
    ports::{
        RepositoryError, RepositoryResult, SprintRepository, TaskRepository, UserRepository,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// Runs a Diesel operation on the blocking thread pool with a pooled
/// connection.
async fn run_blocking<F, T>(pool: &BoardPgPool, f: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let shared = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = shared.get().map_err(RepositoryError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(RepositoryError::persistence)?
}

/// `PostgreSQL`-backed user directory.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: BoardPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &Username) -> RepositoryResult<Option<User>> {
        let lookup = username.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = users::table
                .filter(users::username.eq(lookup))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn list(&self) -> RepositoryResult<Vec<User>> {
        run_blocking(&self.pool, |connection| {
            let rows = users::table
                .order(users::username.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }
}

/// `PostgreSQL`-backed sprint store.
#[derive(Debug, Clone)]
pub struct PostgresSprintRepository {
    pool: BoardPgPool,
}

impl PostgresSprintRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SprintRepository for PostgresSprintRepository {
    async fn insert(&self, fields: &SprintFields) -> RepositoryResult<Sprint> {
        let record = to_sprint_record(fields);
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(sprints::table)
                .values(&record)
                .returning(SprintRow::as_returning())
                .get_result::<SprintRow>(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(row_to_sprint(row))
        })
        .await
    }

    async fn update(&self, sprint: &Sprint) -> RepositoryResult<()> {
        let id = sprint.id();
        let record = to_sprint_record(sprint.fields());
        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(sprints::table.find(id.value()))
                .set(&record)
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            if updated == 0 {
                return Err(RepositoryError::SprintNotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: SprintId) -> RepositoryResult<Option<Sprint>> {
        run_blocking(&self.pool, move |connection| {
            let row = sprints::table
                .find(id.value())
                .select(SprintRow::as_select())
                .first::<SprintRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            Ok(row.map(row_to_sprint))
        })
        .await
    }

    async fn list(&self) -> RepositoryResult<Vec<Sprint>> {
        run_blocking(&self.pool, |connection| {
            let rows = sprints::table
                .order((sprints::end_date.asc(), sprints::id.asc()))
                .select(SprintRow::as_select())
                .load::<SprintRow>(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_sprint).collect())
        })
        .await
    }
}

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: BoardPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, fields: &TaskFields) -> RepositoryResult<Task> {
        let record = to_task_record(fields);
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&record)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let id = task.id();
        let record = to_task_record(task.fields());
        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(tasks::table.find(id.value()))
                .set(&record)
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            if updated == 0 {
                return Err(RepositoryError::TaskNotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, filter: &TaskFilter) -> RepositoryResult<Vec<Task>> {
        let criteria = filter.clone();
        run_blocking(&self.pool, move |connection| {
            let mut query = tasks::table.select(TaskRow::as_select()).into_boxed();
            if let Some(sprint) = criteria.sprint {
                query = query.filter(tasks::sprint_id.eq(sprint.value()));
            }
            if let Some(status) = criteria.status {
                query = query.filter(tasks::status.eq(status.as_str()));
            }
            if let Some(assigned) = criteria.assigned {
                query = query.filter(tasks::assigned.eq(String::from(assigned)));
            }
            query = match criteria.backlog {
                Some(true) => query.filter(tasks::sprint_id.is_null()),
                Some(false) => query.filter(tasks::sprint_id.is_not_null()),
                None => query,
            };
            let rows = query
                .order((tasks::sort_order.asc(), tasks::name.asc(), tasks::id.asc()))
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn row_to_user(row: UserRow) -> RepositoryResult<User> {
    let username = Username::new(row.username).map_err(RepositoryError::persistence)?;
    Ok(User::new(UserId::new(row.id), username)
        .with_name(row.first_name, row.last_name)
        .with_active(row.is_active))
}

fn to_sprint_record(fields: &SprintFields) -> SprintRecord {
    SprintRecord {
        name: fields.name.clone(),
        description: fields.description.clone(),
        end_date: fields.end,
    }
}

fn row_to_sprint(row: SprintRow) -> Sprint {
    let fields = SprintFields {
        name: row.name,
        description: row.description,
        end: row.end_date,
    };
    Sprint::from_fields(SprintId::new(row.id), fields)
}

fn to_task_record(fields: &TaskFields) -> TaskRecord {
    TaskRecord {
        name: fields.name.clone(),
        description: fields.description.clone(),
        sprint_id: fields.sprint.map(SprintId::value),
        status: fields.status.as_str().to_owned(),
        sort_order: fields.order,
        assigned: fields.assigned.as_ref().map(|username| username.as_str().to_owned()),
        started: fields.started,
        due: fields.due,
        completed: fields.completed,
    }
}

fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    let TaskRow {
        id,
        name,
        description,
        sprint_id,
        status: persisted_status,
        sort_order,
        assigned: persisted_assigned,
        started,
        due,
        completed,
    } = row;

    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(RepositoryError::persistence)?;
    let assigned = persisted_assigned
        .map(Username::new)
        .transpose()
        .map_err(RepositoryError::persistence)?;

    let fields = TaskFields {
        name,
        description,
        sprint: sprint_id.map(SprintId::new),
        status,
        order: sort_order,
        assigned,
        started,
        due,
        completed,
    };
    Ok(Task::from_fields(TaskId::new(id), fields))
}
