//! In-memory integration tests for task lifecycle operations.

use std::sync::Arc;

use super::helpers::{TestTaskService, task_service};
use chrono::{TimeDelta, Utc};
use mockable::DefaultClock;
use rstest::rstest;
use taskmaster::task::{
    domain::{Task, TaskId, TaskStatus, TaskTitle},
    services::{TaskLifecycleError, UpdateTaskRequest},
};

fn title(value: &str) -> TaskTitle {
    TaskTitle::new(value).expect("valid title")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn release_notes_task_moves_from_todo_to_completed(task_service: TestTaskService) {
    let created = task_service
        .create_task(Task::new(title("Draft release notes"), "user-1", &DefaultClock))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.status(), TaskStatus::ToDo);
    let completed_at = Utc::now() - TimeDelta::minutes(15);

    let before_update = Utc::now();
    let updated = task_service
        .update_task(
            UpdateTaskRequest::new(created.id(), title("Draft release notes"), TaskStatus::Completed)
                .with_completed_on(completed_at),
        )
        .await
        .expect("update should succeed");
    let after_update = Utc::now();

    assert_eq!(updated.status(), TaskStatus::Completed);
    assert_eq!(updated.completed_on(), Some(completed_at));
    assert!(updated.last_modified_on() >= before_update);
    assert!(updated.last_modified_on() <= after_update);
    assert!(updated.last_modified_on() >= created.last_modified_on());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_can_be_reopened(task_service: TestTaskService) {
    let created = task_service
        .create_task(Task::new(title("Reopen me"), "user-1", &DefaultClock))
        .await
        .expect("task creation should succeed");
    let completed_at = Utc::now();
    task_service
        .update_task(
            UpdateTaskRequest::new(created.id(), title("Reopen me"), TaskStatus::Completed)
                .with_completed_on(completed_at),
        )
        .await
        .expect("completion should succeed");

    let reopened = task_service
        .update_task(UpdateTaskRequest::new(
            created.id(),
            title("Reopen me"),
            TaskStatus::ToDo,
        ))
        .await
        .expect("reopening should succeed");

    assert_eq!(reopened.status(), TaskStatus::ToDo);
    assert_eq!(reopened.completed_on(), Some(completed_at));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_cannot_be_updated(task_service: TestTaskService) {
    let created = task_service
        .create_task(Task::new(title("Short lived"), "user-1", &DefaultClock))
        .await
        .expect("task creation should succeed");
    task_service
        .delete_task(created.id())
        .await
        .expect("delete should succeed");

    let result = task_service
        .update_task(UpdateTaskRequest::from(created.clone()))
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::NotFound(id)) if id == created.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_unknown_task_succeeds_repeatedly(task_service: TestTaskService) {
    let id = TaskId::new();
    for _ in 0..2 {
        task_service
            .delete_task(id)
            .await
            .expect("delete should succeed");
    }
    let listed = task_service
        .list_tasks()
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_are_all_listed(task_service: TestTaskService) {
    let shared = Arc::new(task_service);
    let mut handles = Vec::new();
    for index in 0..8 {
        let service = Arc::clone(&shared);
        handles.push(tokio::spawn(async move {
            let draft = Task::new(title(&format!("Task {index}")), "user-1", &DefaultClock);
            service.create_task(draft).await
        }));
    }
    for handle in handles {
        handle
            .await
            .expect("task should join")
            .expect("task creation should succeed");
    }

    let listed = shared
        .list_tasks()
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 8);
}
