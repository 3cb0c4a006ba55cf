//! Application services for the task log.

mod listing;
mod maintenance;

pub use listing::{TaskLogService, TaskLogServiceError, TaskLogServiceResult};
