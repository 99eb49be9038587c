//! Given steps for task CRUD BDD scenarios.

use super::world::{TaskWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{
    domain::{TaskId, TaskUpdate},
    services::CreateTaskRequest,
};

#[given("an empty task board")]
fn empty_task_board(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_all()).wrap_err("list tasks")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty board, found {}", tasks.len()));
    }
    Ok(())
}

#[given(r#"a task titled "{title}" exists"#)]
fn task_exists(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(CreateTaskRequest::new(title)))
        .wrap_err("create task for scenario setup")?;
    world.last_task_id = Some(TaskId::new(created.id));
    Ok(())
}

#[given(r#"a task titled "{title}" with description "{description}""#)]
fn described_task_exists(
    world: &mut TaskWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(title).with_description(description);
    let created =
        run_async(world.service.create(request)).wrap_err("create task for scenario setup")?;
    world.last_task_id = Some(TaskId::new(created.id));
    Ok(())
}

#[given(r#"the last task is moved to "{status}""#)]
fn last_task_moved_to(world: &mut TaskWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.require_last_task_id()?;
    let status = parse_status(&status)?;
    run_async(
        world
            .service
            .update(id, TaskUpdate::new().with_status(status)),
    )
    .wrap_err("move task for scenario setup")?;
    Ok(())
}
