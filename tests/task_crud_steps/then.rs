//! Then steps for task CRUD BDD scenarios.

use super::world::{TaskWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskboard::task::{
    domain::{TaskDomainError, TaskId},
    services::TaskServiceError,
};

#[then(r#"the created task has title "{title}" and status "{status}""#)]
fn created_task_has(world: &TaskWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let task = world.require_created()?;
    let status = parse_status(&status)?;
    if task.title != title {
        return Err(eyre::eyre!("expected title {title:?}, found {:?}", task.title));
    }
    if task.status != status {
        return Err(eyre::eyre!("expected status {status}, found {}", task.status));
    }
    if task.updated_at.is_some() {
        return Err(eyre::eyre!("new task should not carry an update timestamp"));
    }
    Ok(())
}

#[then("the created task can be fetched by its identifier")]
fn created_task_fetchable(world: &TaskWorld) -> Result<(), eyre::Report> {
    let created = world.require_created()?;
    let fetched = run_async(world.service.get_by_id(TaskId::new(created.id)))
        .wrap_err("fetch created task")?;
    if fetched.as_ref() != Some(created) {
        return Err(eyre::eyre!("fetched task {fetched:?} does not match {created:?}"));
    }
    Ok(())
}

#[then("creation fails with an empty title error")]
fn creation_fails_with_empty_title(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    if !matches!(
        result,
        Err(TaskServiceError::Validation(TaskDomainError::EmptyTitle))
    ) {
        return Err(eyre::eyre!("expected empty title error, got {result:?}"));
    }
    Ok(())
}

#[then("the board holds {count:u64} tasks")]
fn board_holds(world: &TaskWorld, count: u64) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_all()).wrap_err("list tasks")?;
    let held = u64::try_from(tasks.len()).wrap_err("task count out of range")?;
    if held != count {
        return Err(eyre::eyre!("expected {count} tasks, found {held}"));
    }
    Ok(())
}

#[then(r#"the updated task has status "{status}""#)]
fn updated_task_has_status(world: &TaskWorld, status: String) -> Result<(), eyre::Report> {
    let task = world.require_updated()?;
    let status = parse_status(&status)?;
    if task.status != status {
        return Err(eyre::eyre!("expected status {status}, found {}", task.status));
    }
    match task.updated_at {
        Some(updated_at) if updated_at >= task.created_at => Ok(()),
        other => Err(eyre::eyre!("unexpected update timestamp {other:?}")),
    }
}

#[then(r#"the updated task keeps title "{title}" and description "{description}""#)]
fn updated_task_keeps(
    world: &TaskWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let task = world.require_updated()?;
    if task.title != title {
        return Err(eyre::eyre!("expected title {title:?}, found {:?}", task.title));
    }
    if task.description.as_deref() != Some(description.as_str()) {
        return Err(eyre::eyre!(
            "expected description {description:?}, found {:?}",
            task.description
        ));
    }
    Ok(())
}

#[then("the update fails with a not found error")]
fn update_fails_not_found(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))?;
    if !matches!(result, Err(TaskServiceError::NotFound(_))) {
        return Err(eyre::eyre!("expected not found error, got {result:?}"));
    }
    Ok(())
}

#[then("the deletions report true then false")]
fn deletions_report(world: &TaskWorld) -> Result<(), eyre::Report> {
    if world.delete_results != [true, false] {
        return Err(eyre::eyre!(
            "expected deletions to report [true, false], got {:?}",
            world.delete_results
        ));
    }
    Ok(())
}

#[then("the created task has a new identifier")]
fn created_task_has_new_identifier(world: &TaskWorld) -> Result<(), eyre::Report> {
    let created = world.require_created()?;
    let deleted = world
        .deleted_id
        .ok_or_else(|| eyre::eyre!("no task was deleted in this scenario"))?;
    if TaskId::new(created.id) <= deleted {
        return Err(eyre::eyre!(
            "expected an identifier above {deleted}, got {}",
            created.id
        ));
    }
    Ok(())
}

#[then(r#"the listing contains only "{title}""#)]
fn listing_contains_only(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing in scenario world"))?;
    let titles: Vec<&str> = listing.iter().map(|task| task.title.as_str()).collect();
    if titles != [title.as_str()] {
        return Err(eyre::eyre!("expected only {title:?}, got {titles:?}"));
    }
    Ok(())
}
