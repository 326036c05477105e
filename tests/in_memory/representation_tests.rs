//! In-memory integration tests for hyperlinked record views.

use super::helpers::{MemoryBoard, board, days_from_today, username};
use rstest::rstest;
use serde_json::json;
use sprintboard::board::{
    adapters::PrefixUrlResolver,
    domain::{SprintFields, TaskFields},
    filter::TaskFilter,
    representation::{Representable, RequestContext, represent_all},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listed_records_link_to_each_other(board: MemoryBoard) -> Result<(), eyre::Report> {
    let resolver = PrefixUrlResolver::new("https://board.example.com", "/api");
    let context = RequestContext::new(&resolver);
    let end = days_from_today(7)?;
    let sprint = board
        .sprints
        .create_sprint(SprintFields::new(end).with_name("Hardening"))
        .await?;
    let task = board
        .tasks
        .create_task(
            TaskFields::new("Fix flaky test")
                .with_sprint(sprint.id())
                .with_assigned(username("bob")?),
        )
        .await?;

    let listed = board.tasks.list_tasks(&TaskFilter::new()).await?;
    let views = serde_json::to_value(represent_all(&listed, &context))?;
    let task_path = format!("https://board.example.com/api/tasks/{}/", task.id());
    let sprint_path = format!("https://board.example.com/api/sprints/{}/", sprint.id());
    eyre::ensure!(
        views
            == json!([{
                "id": task.id(),
                "name": "Fix flaky test",
                "description": "",
                "sprint": sprint.id(),
                "status": "not_started",
                "status_display": "Not Started",
                "order": 0,
                "assigned": "bob",
                "started": null,
                "due": null,
                "completed": null,
                "links": {
                    "self": task_path,
                    "sprint": sprint_path,
                    "assigned": "https://board.example.com/api/users/bob/",
                },
            }]),
        "unexpected task listing {views}"
    );

    let sprint_view = serde_json::to_value(sprint.represent(&context))?;
    eyre::ensure!(
        sprint_view["links"]["tasks"]
            == json!(format!(
                "https://board.example.com/api/tasks/?sprint={}",
                sprint.id()
            )),
        "unexpected sprint links {sprint_view}"
    );
    eyre::ensure!(
        sprint_view["end"] == json!(end.format("%Y-%m-%d").to_string()),
        "unexpected sprint end {sprint_view}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_views_link_to_assigned_work(board: MemoryBoard) -> Result<(), eyre::Report> {
    let resolver = PrefixUrlResolver::new("http://localhost:8000", "");
    let context = RequestContext::new(&resolver);

    let users = board.users.list_users().await?;
    let views = serde_json::to_value(represent_all(&users, &context))?;

    eyre::ensure!(
        views
            == json!([
                {
                    "id": 1,
                    "username": "alice",
                    "full_name": "Alice Liddell",
                    "is_active": true,
                    "links": {
                        "self": "http://localhost:8000/users/alice/",
                        "tasks": "http://localhost:8000/tasks/?assigned=alice",
                    },
                },
                {
                    "id": 2,
                    "username": "bob",
                    "full_name": "Bob",
                    "is_active": true,
                    "links": {
                        "self": "http://localhost:8000/users/bob/",
                        "tasks": "http://localhost:8000/tasks/?assigned=bob",
                    },
                },
            ]),
        "unexpected user listing {views}"
    );
    Ok(())
}
