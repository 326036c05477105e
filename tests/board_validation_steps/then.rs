//! Then steps for board validation BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::then;

#[then("the sprint is stored")]
fn sprint_is_stored(world: &BoardWorld) -> Result<(), eyre::Report> {
    let sprint = match world.last_sprint_result.as_ref() {
        Some(Ok(sprint)) => sprint,
        other => return Err(eyre::eyre!("expected a stored sprint, got {other:?}")),
    };
    let fetched = run_async(world.sprint_service.find_sprint(sprint.id()))?;
    eyre::ensure!(
        fetched.as_ref() == Some(sprint),
        "stored sprint {fetched:?} differs from {sprint:?}"
    );
    Ok(())
}

#[then(r#"the sprint name is "{name}""#)]
fn sprint_name_is(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let sprint = world.current_sprint()?;
    eyre::ensure!(
        sprint.name() == name,
        "expected sprint name {name}, found {}",
        sprint.name()
    );
    Ok(())
}

#[then("the task is stored")]
fn task_is_stored(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = match world.last_task_result.as_ref() {
        Some(Ok(task)) => task,
        other => return Err(eyre::eyre!("expected a stored task, got {other:?}")),
    };
    let fetched = run_async(world.task_service.find_task(task.id()))?;
    eyre::ensure!(
        fetched.as_ref() == Some(task),
        "stored task {fetched:?} differs from {task:?}"
    );
    Ok(())
}

#[then(r#"the request is rejected with "{message}""#)]
fn request_rejected_with(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let err = world.last_validation_error()?;
    eyre::ensure!(
        err.message() == message,
        "expected rejection {message:?}, got {:?}",
        err.message()
    );
    Ok(())
}

#[then("the task remains in the first sprint")]
fn task_remains_in_first_sprint(world: &BoardWorld) -> Result<(), eyre::Report> {
    let first = world
        .sprints
        .first()
        .ok_or_else(|| eyre::eyre!("missing first sprint in scenario world"))?
        .id();
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let fetched = run_async(world.task_service.find_task(task.id()))?
        .ok_or_else(|| eyre::eyre!("task {} disappeared", task.id()))?;
    eyre::ensure!(
        fetched.sprint() == Some(first),
        "expected task in sprint {first}, found {:?}",
        fetched.sprint()
    );
    Ok(())
}
