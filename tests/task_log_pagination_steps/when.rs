//! When steps for task log pagination BDD scenarios.

use super::world::{TaskLogWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasklog::task_log::{
    domain::{CompletedTask, OwnerId, RawCursorParams, TaskId},
    ports::CompletedTaskRepository,
};

fn list(world: &mut TaskLogWorld, params: &RawCursorParams) -> Result<(), eyre::Report> {
    let page = run_async(world.service.list_page(params)).wrap_err("list task log page")?;
    world.last_page = Some(page);
    Ok(())
}

#[when(r#"page "{page}" is requested with watermark "{watermark}""#)]
fn page_requested(
    world: &mut TaskLogWorld,
    page: String,
    watermark: String,
) -> Result<(), eyre::Report> {
    let params = RawCursorParams::new()
        .with_page(page)
        .with_completed_date(watermark);
    list(world, &params)
}

#[when("the log is requested without a cursor")]
fn requested_without_cursor(world: &mut TaskLogWorld) -> Result<(), eyre::Report> {
    list(world, &RawCursorParams::new())
}

#[when("the next cursor is followed")]
fn next_cursor_followed(world: &mut TaskLogWorld) -> Result<(), eyre::Report> {
    let next = world.last_page()?.next_cursor();
    let params = RawCursorParams::new()
        .with_page(next.page().to_string())
        .with_completed_date(next.watermark().epoch_seconds().to_string());
    list(world, &params)
}

/// Inserts a task completed at the world's current instant, bypassing the
/// service so the listing sees it as a concurrent write.
pub fn complete_task_now(world: &TaskLogWorld, id: i64) -> Result<(), eyre::Report> {
    let task = CompletedTask::new(
        TaskId::new(id),
        OwnerId::DEFAULT,
        world.now,
        format!("Task {id}"),
    )
    .wrap_err("build late task")?;
    run_async(world.repository.insert(&task)).wrap_err("insert late task")?;
    Ok(())
}

#[when("task {id:i64} is completed now")]
fn task_completed_while_browsing(world: &mut TaskLogWorld, id: i64) -> Result<(), eyre::Report> {
    complete_task_now(world, id)
}
