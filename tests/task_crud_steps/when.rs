//! When steps for task CRUD BDD scenarios.

use super::world::{TaskWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::{TaskId, TaskUpdate},
    services::CreateTaskRequest,
};

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut TaskWorld, title: String) {
    let result = run_async(world.service.create(CreateTaskRequest::new(title)));
    if let Ok(task) = &result {
        world.last_task_id = Some(TaskId::new(task.id));
    }
    world.last_create_result = Some(result);
}

#[when(r#"the last task is marked "{status}""#)]
fn mark_last_task(world: &mut TaskWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.require_last_task_id()?;
    let status = parse_status(&status)?;
    world.last_update_result = Some(run_async(
        world
            .service
            .update(id, TaskUpdate::new().with_status(status)),
    ));
    Ok(())
}

#[when(r#"task {id:u64} is marked "{status}""#)]
fn mark_task_by_id(world: &mut TaskWorld, id: u64, status: String) -> Result<(), eyre::Report> {
    let id = i64::try_from(id).wrap_err("task id out of range")?;
    let status = parse_status(&status)?;
    world.last_update_result = Some(run_async(
        world
            .service
            .update(TaskId::new(id), TaskUpdate::new().with_status(status)),
    ));
    Ok(())
}

#[when("the last task is deleted")]
fn delete_last_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world.require_last_task_id()?;
    let removed = run_async(world.service.delete(id)).wrap_err("delete task")?;
    world.deleted_id = Some(id);
    world.delete_results.push(removed);
    Ok(())
}

#[when(r#"tasks with status "{status}" are listed"#)]
fn list_by_status(world: &mut TaskWorld, status: String) -> Result<(), eyre::Report> {
    let status = parse_status(&status)?;
    let listing =
        run_async(world.service.list_by_status(status)).wrap_err("list tasks by status")?;
    world.last_listing = Some(listing);
    Ok(())
}
