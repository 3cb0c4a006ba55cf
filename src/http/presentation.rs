//! Rendering of task log pages as HTML and JSON.

use super::TASK_LOG_PATH;
use crate::task_log::domain::{CompletedTask, TaskLogPage};
use chrono::SecondsFormat;
use minijinja::Environment;
use serde::Serialize;

const TASK_LOG_TEMPLATE: &str = "task_log.html";

/// One task as shown to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task number.
    pub task_id: i64,
    /// Completion time in RFC 3339 format.
    pub completed_at: String,
    /// Task text.
    pub content: String,
}

impl From<&CompletedTask> for TaskView {
    fn from(task: &CompletedTask) -> Self {
        Self {
            task_id: task.id().value(),
            completed_at: task.completed_at().to_rfc3339_opts(SecondsFormat::Secs, true),
            content: task.content().to_owned(),
        }
    }
}

/// Presentation model of a task log page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskLogView {
    /// Page number being shown.
    pub page: u32,
    /// Watermark as Unix epoch seconds.
    pub completed_date: i64,
    /// Tasks on the page, newest first.
    pub tasks: Vec<TaskView>,
    /// Link to the following page, carrying the same watermark.
    pub next_url: String,
}

impl From<&TaskLogPage> for TaskLogView {
    fn from(page: &TaskLogPage) -> Self {
        let cursor = page.cursor();
        Self {
            page: cursor.page().value(),
            completed_date: cursor.watermark().epoch_seconds(),
            tasks: page.tasks().iter().map(TaskView::from).collect(),
            next_url: format!("{TASK_LOG_PATH}?{}", page.next_cursor().to_query_string()),
        }
    }
}

/// Loaded page templates.
#[derive(Debug)]
pub struct Templates {
    environment: Environment<'static>,
}

impl Templates {
    /// Loads the bundled templates.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when a bundled template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template(
            TASK_LOG_TEMPLATE,
            include_str!("templates/task_log.html"),
        )?;
        Ok(Self { environment })
    }

    /// Renders the HTML task log page.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn render_task_log(&self, view: &TaskLogView) -> Result<String, minijinja::Error> {
        self.environment
            .get_template(TASK_LOG_TEMPLATE)?
            .render(view)
    }
}
