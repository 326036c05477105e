//! In-memory integration tests for sprint planning and task progress.

use super::helpers::{MemoryBoard, board, days_from_today, username};
use rstest::rstest;
use sprintboard::board::{
    domain::{SprintFields, TaskChanges, TaskFields, TaskStatus},
    filter::TaskFilter,
    services::TaskServiceError,
    validation::ValidationError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_moves_from_backlog_through_to_done(board: MemoryBoard) -> Result<(), eyre::Report> {
    let sprint = board
        .sprints
        .create_sprint(SprintFields::new(days_from_today(14)?).with_name("Release"))
        .await?;
    let idea = board
        .tasks
        .create_task(TaskFields::new("Audit log").with_assigned(username("alice")?))
        .await?;
    eyre::ensure!(idea.is_backlog(), "new task should start in the backlog");

    board
        .tasks
        .update_task(idea.id(), TaskChanges::new().with_sprint(Some(sprint.id())))
        .await?;
    board
        .tasks
        .update_task(
            idea.id(),
            TaskChanges::new()
                .with_status(TaskStatus::InProgress)
                .with_started(Some(days_from_today(0)?)),
        )
        .await?;
    let finished = board
        .tasks
        .update_task(
            idea.id(),
            TaskChanges::new()
                .with_status(TaskStatus::Done)
                .with_completed(Some(days_from_today(0)?)),
        )
        .await?;

    eyre::ensure!(finished.sprint() == Some(sprint.id()), "sprint mismatch");
    eyre::ensure!(finished.status() == TaskStatus::Done, "status mismatch");
    let stored = board.tasks.find_task(idea.id()).await?;
    eyre::ensure!(stored.as_ref() == Some(&finished), "stored task differs");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_stays_in_its_sprint(board: MemoryBoard) -> Result<(), eyre::Report> {
    let current = board
        .sprints
        .create_sprint(SprintFields::new(days_from_today(7)?))
        .await?;
    let next = board
        .sprints
        .create_sprint(SprintFields::new(days_from_today(21)?))
        .await?;
    let done = board
        .tasks
        .create_task(
            TaskFields::new("Closed out")
                .with_sprint(current.id())
                .with_status(TaskStatus::Done)
                .with_completed(days_from_today(0)?),
        )
        .await?;

    for target in [Some(next.id()), None] {
        let result = board
            .tasks
            .update_task(done.id(), TaskChanges::new().with_sprint(target))
            .await;
        eyre::ensure!(
            matches!(
                result,
                Err(TaskServiceError::Validation(
                    ValidationError::SprintOfCompletedTask
                ))
            ),
            "expected completed task move to be rejected, got {result:?}"
        );
    }

    let stored = board.tasks.find_task(done.id()).await?;
    eyre::ensure!(stored == Some(done), "rejected moves must not persist");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filtered_listing_combines_query_criteria(board: MemoryBoard) -> Result<(), eyre::Report> {
    let sprint = board
        .sprints
        .create_sprint(SprintFields::new(days_from_today(10)?))
        .await?;
    let alice = username("alice")?;
    let bob = username("bob")?;
    for (name, assignee, order) in [
        ("Write tests", &alice, 2),
        ("Write code", &alice, 1),
        ("Review code", &bob, 3),
    ] {
        board
            .tasks
            .create_task(
                TaskFields::new(name)
                    .with_sprint(sprint.id())
                    .with_assigned(assignee.clone())
                    .with_order(order),
            )
            .await?;
    }
    board
        .tasks
        .create_task(TaskFields::new("Someday").with_assigned(alice.clone()))
        .await?;

    let sprint_param = sprint.id().to_string();
    let mine = board
        .tasks
        .list_tasks_from_query([
            ("sprint", sprint_param.as_str()),
            ("assigned", "alice"),
            ("page", "1"),
        ])
        .await?;
    let names: Vec<&str> = mine.iter().map(|task| task.name()).collect();
    eyre::ensure!(
        names == ["Write code", "Write tests"],
        "unexpected selection {names:?}"
    );

    let backlog = board
        .tasks
        .list_tasks(&TaskFilter::new().with_backlog(true))
        .await?;
    eyre::ensure!(backlog.len() == 1, "expected one backlog task");

    let unusable = board
        .tasks
        .list_tasks_from_query([("sprint", "next")])
        .await?;
    eyre::ensure!(unusable.is_empty(), "unusable sprint value must select nothing");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sprints_are_listed_by_end_date(board: MemoryBoard) -> Result<(), eyre::Report> {
    let later = board
        .sprints
        .create_sprint(SprintFields::new(days_from_today(30)?).with_name("Later"))
        .await?;
    let sooner = board
        .sprints
        .create_sprint(SprintFields::new(days_from_today(5)?).with_name("Sooner"))
        .await?;

    let listed = board.sprints.list_sprints().await?;
    let ids: Vec<_> = listed.iter().map(|sprint| sprint.id()).collect();
    eyre::ensure!(ids == [sooner.id(), later.id()], "unexpected order {ids:?}");
    Ok(())
}
