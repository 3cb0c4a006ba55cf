//! Domain model for the completed-task log.
//!
//! Cursor resolution, page query derivation, and task values live here with
//! no infrastructure dependencies. Repositories and HTTP handlers consume
//! these types through the ports and services layers.

mod cursor;
mod error;
mod ids;
mod page;
mod seed;
mod task;

pub use cursor::{PAGE_SIZE, PageNumber, PageQuery, PaginationCursor, RawCursorParams, Watermark};
pub use error::TaskLogDomainError;
pub use ids::{OwnerId, TaskId};
pub use page::TaskLogPage;
pub use seed::{random_task, scenario_tasks};
pub use task::{CompletedTask, PersistedCompletedTask};
