//! HTTP surface: the visitor greeter and the task log pages.
//!
//! | Method | Path           | Behaviour                                  |
//! |--------|----------------|--------------------------------------------|
//! | GET    | `/`            | Greets the visitor and sets `seen`         |
//! | GET    | `/healthz`     | Liveness probe                             |
//! | GET    | `/tasks`       | HTML page of the task log                  |
//! | GET    | `/api/tasks`   | JSON page of the task log                  |
//! | POST   | `/tasks/seed`  | Inserts demonstration tasks                |
//! | POST   | `/tasks/random`| Inserts one random task                    |
//! | POST   | `/tasks/reset` | Deletes the current user's tasks           |

mod error;
mod greeter;
mod presentation;
mod state;
mod task_log;

pub use error::HttpError;
pub use presentation::{TaskLogView, TaskView, Templates};
pub use state::AppState;

use crate::task_log::ports::{CompletedTaskRepository, CurrentUserProvider};
use axum::Router;
use axum::routing::{get, post};
use mockable::Clock;

/// Path of the HTML task log page.
pub const TASK_LOG_PATH: &str = "/tasks";

/// Builds the application router over `state`.
#[must_use]
pub fn router<R, U, C>(state: AppState<R, U, C>) -> Router
where
    R: CompletedTaskRepository + 'static,
    U: CurrentUserProvider + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(greeter::greet))
        .route("/healthz", get(greeter::health))
        .route(TASK_LOG_PATH, get(task_log::show_page::<R, U, C>))
        .route("/api/tasks", get(task_log::show_page_json::<R, U, C>))
        .route("/tasks/seed", post(task_log::seed::<R, U, C>))
        .route("/tasks/random", post(task_log::add_random::<R, U, C>))
        .route("/tasks/reset", post(task_log::reset::<R, U, C>))
        .with_state(state)
}
