//! One resolved page of the task log.

use super::{CompletedTask, PaginationCursor};

/// Tasks selected by a cursor, together with the cursor for the next page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLogPage {
    cursor: PaginationCursor,
    tasks: Vec<CompletedTask>,
}

impl TaskLogPage {
    /// Creates a page from the cursor that selected it and its rows.
    #[must_use]
    pub const fn new(cursor: PaginationCursor, tasks: Vec<CompletedTask>) -> Self {
        Self { cursor, tasks }
    }

    /// Returns the cursor that selected this page.
    #[must_use]
    pub const fn cursor(&self) -> PaginationCursor {
        self.cursor
    }

    /// Returns the cursor for the following page.
    ///
    /// The next cursor is always present, even past the end of the data;
    /// following it simply yields an empty page.
    #[must_use]
    pub const fn next_cursor(&self) -> PaginationCursor {
        self.cursor.next()
    }

    /// Returns the tasks on this page, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[CompletedTask] {
        &self.tasks
    }

    /// Returns whether the page holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
