//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_instant, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskmaster::task::{
    domain::{Task, TaskId, TaskStatus, TaskTitle},
    services::UpdateTaskRequest,
};

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let task_title = TaskTitle::new(title).wrap_err("build title for scenario task")?;
    let created = run_async(
        world
            .service
            .create_task(Task::new(task_title, "scenario-user", &DefaultClock)),
    )
    .wrap_err("create task for lifecycle scenario")?;

    world.target_id = Some(created.id());
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"the task has been completed at "{completed_at}""#)]
fn task_has_been_completed(
    world: &mut TaskLifecycleWorld,
    completed_at: String,
) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;
    let request = UpdateTaskRequest::new(task.id(), task.title().clone(), TaskStatus::Completed)
        .with_completed_on(parse_instant(&completed_at)?);

    let completed = run_async(world.service.update_task(request))
        .wrap_err("complete task in scenario setup")?;
    world.last_task = Some(completed);
    Ok(())
}

#[given("a task identifier that was never created")]
fn task_identifier_never_created(world: &mut TaskLifecycleWorld) {
    world.target_id = Some(TaskId::new());
}
