//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_instant, run_async};
use rstest_bdd_macros::when;
use taskmaster::task::{
    domain::{TaskId, TaskStatus, TaskTitle},
    services::UpdateTaskRequest,
};

fn build_request(
    world: &TaskLifecycleWorld,
    status: &str,
) -> Result<UpdateTaskRequest, eyre::Report> {
    let id: TaskId = world
        .target_id
        .ok_or_else(|| eyre::eyre!("missing target task identifier in scenario world"))?;
    let target_status = TaskStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let title = match world.last_task.as_ref() {
        Some(task) => task.title().clone(),
        None => TaskTitle::new("Untracked task")?,
    };
    Ok(UpdateTaskRequest::new(id, title, target_status))
}

fn apply_update(world: &mut TaskLifecycleWorld, request: UpdateTaskRequest) {
    let result = run_async(world.service.update_task(request));
    if let Ok(ref updated) = result {
        world.last_task = Some(updated.clone());
    }
    world.last_update_result = Some(result);
}

#[when(r#"the task is marked "{status}" with completion time "{completed_at}""#)]
fn update_task_with_completion(
    world: &mut TaskLifecycleWorld,
    status: String,
    completed_at: String,
) -> Result<(), eyre::Report> {
    let request = build_request(world, &status)?.with_completed_on(parse_instant(&completed_at)?);
    apply_update(world, request);
    Ok(())
}

#[when(r#"the task is moved to "{status}""#)]
fn update_task(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let request = build_request(world, &status)?;
    apply_update(world, request);
    Ok(())
}
