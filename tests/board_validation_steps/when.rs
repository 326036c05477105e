//! When steps for board validation BDD scenarios.

use super::world::{BoardWorld, days_from_today, run_async};
use rstest_bdd_macros::when;
use sprintboard::board::domain::{
    SprintChanges, SprintFields, Task, TaskChanges, TaskFields, TaskStatus,
};

fn create_sprint(world: &mut BoardWorld, days: i64) -> Result<(), eyre::Report> {
    let fields = SprintFields::new(days_from_today(days)?).with_name("Scenario sprint");
    let result = run_async(world.sprint_service.create_sprint(fields));
    if let Ok(ref created) = result {
        world.sprints.push(created.clone());
    }
    world.last_sprint_result = Some(result);
    Ok(())
}

fn update_sprint(world: &mut BoardWorld, changes: SprintChanges) -> Result<(), eyre::Report> {
    let id = world.current_sprint()?.id();
    let result = run_async(world.sprint_service.update_sprint(id, changes));
    if let Ok(ref updated) = result {
        world.sprints.push(updated.clone());
    }
    world.last_sprint_result = Some(result);
    Ok(())
}

fn update_task(world: &mut BoardWorld, changes: TaskChanges) -> Result<(), eyre::Report> {
    let id = world
        .task
        .as_ref()
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let result = run_async(world.task_service.update_task(id, changes));
    if let Ok(ref updated) = result {
        world.task = Some(updated.clone());
    }
    world.last_task_result = Some(result);
    Ok(())
}

#[when("a sprint ending in {days:i64} days is created")]
fn future_sprint_created(world: &mut BoardWorld, days: i64) -> Result<(), eyre::Report> {
    create_sprint(world, days)
}

#[when("a sprint that ended {days:i64} days ago is created")]
fn past_sprint_created(world: &mut BoardWorld, days: i64) -> Result<(), eyre::Report> {
    create_sprint(world, -days)
}

#[when(r#"the sprint is renamed to "{name}""#)]
fn sprint_renamed(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    update_sprint(world, SprintChanges::new().with_name(name))
}

#[when("the sprint end is moved to {days:i64} days ago")]
fn sprint_end_moved(world: &mut BoardWorld, days: i64) -> Result<(), eyre::Report> {
    let end = days_from_today(-days)?;
    update_sprint(world, SprintChanges::new().with_end(end))
}

#[when(r#"a task "{name}" is planned into the sprint"#)]
fn task_planned(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let sprint = world.current_sprint()?.id();
    let result = run_async(
        world
            .task_service
            .create_task(TaskFields::new(name).with_sprint(sprint)),
    );
    if let Ok(ref created) = result {
        world.task = Some(created.clone());
    }
    world.last_task_result = Some(result);
    Ok(())
}

#[when(r#"a backlog task "{name}" is created with status "{status}""#)]
fn backlog_task_created(
    world: &mut BoardWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let result = run_async(
        world
            .task_service
            .create_task(TaskFields::new(name).with_status(parsed)),
    );
    world.last_task_result = Some(result);
    Ok(())
}

#[when(r#"the task status is changed to "{status}""#)]
fn task_status_changed(world: &mut BoardWorld, status: String) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    update_task(world, TaskChanges::new().with_status(parsed))
}

#[when("the task is moved to the other sprint")]
fn task_moved(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let other = world
        .sprints
        .get(1)
        .ok_or_else(|| eyre::eyre!("missing second sprint in scenario world"))?
        .id();
    update_task(world, TaskChanges::new().with_sprint(Some(other)))
}
