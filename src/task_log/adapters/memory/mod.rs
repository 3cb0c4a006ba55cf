//! In-memory adapters for the task log.

mod completed_task;

pub use completed_task::InMemoryCompletedTaskRepository;
