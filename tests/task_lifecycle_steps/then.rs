//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_instant};
use rstest_bdd_macros::then;
use taskmaster::task::{domain::TaskStatus, services::TaskLifecycleError};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task completion time is "{completed_at}""#)]
fn task_completion_time_is(
    world: &TaskLifecycleWorld,
    completed_at: String,
) -> Result<(), eyre::Report> {
    let expected = parse_instant(&completed_at)?;
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task"))?;

    if task.completed_on() != Some(expected) {
        return Err(eyre::eyre!(
            "expected completion time {expected}, found {:?}",
            task.completed_on()
        ));
    }
    Ok(())
}

#[then("the update fails with a not found error")]
fn update_fails_with_not_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    if !matches!(result, Err(TaskLifecycleError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound error, got {result:?}"));
    }
    Ok(())
}
