//! Handlers for listing and maintaining the task log.

use super::{AppState, HttpError, TASK_LOG_PATH, TaskLogView};
use crate::task_log::{
    domain::RawCursorParams,
    ports::{CompletedTaskRepository, CurrentUserProvider},
};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use mockable::Clock;
use tracing::debug;

/// Decoded query-string pairs in request order.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Extracts cursor parameters, keeping the first value of a repeated key and
/// treating an undecodable query string like an empty one so that it falls
/// back to a fresh cursor.
fn cursor_params(query: QueryPairs) -> RawCursorParams {
    query.map_or_else(
        |rejection| {
            debug!(error = %rejection, "ignoring undecodable task log query");
            RawCursorParams::new()
        },
        |Query(pairs)| RawCursorParams::from_query_pairs(pairs),
    )
}

async fn load_view<R, U, C>(
    state: &AppState<R, U, C>,
    params: &RawCursorParams,
) -> Result<TaskLogView, HttpError>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    let page = state.service().list_page(params).await?;
    Ok(TaskLogView::from(&page))
}

/// Renders one page of the task log as HTML.
pub async fn show_page<R, U, C>(
    State(state): State<AppState<R, U, C>>,
    query: QueryPairs,
) -> Result<Html<String>, HttpError>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    let view = load_view(&state, &cursor_params(query)).await?;
    Ok(Html(state.templates().render_task_log(&view)?))
}

/// Returns one page of the task log as JSON.
pub async fn show_page_json<R, U, C>(
    State(state): State<AppState<R, U, C>>,
    query: QueryPairs,
) -> Result<Json<TaskLogView>, HttpError>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    let view = load_view(&state, &cursor_params(query)).await?;
    Ok(Json(view))
}

/// Inserts the demonstration tasks and returns to the task log.
pub async fn seed<R, U, C>(State(state): State<AppState<R, U, C>>) -> Result<Redirect, HttpError>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    state.service().seed().await?;
    Ok(Redirect::to(TASK_LOG_PATH))
}

/// Inserts one random task and returns to the task log.
pub async fn add_random<R, U, C>(
    State(state): State<AppState<R, U, C>>,
) -> Result<Redirect, HttpError>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    state.service().add_random().await?;
    Ok(Redirect::to(TASK_LOG_PATH))
}

/// Deletes the current user's tasks and returns to the task log.
pub async fn reset<R, U, C>(State(state): State<AppState<R, U, C>>) -> Result<Redirect, HttpError>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    state.service().reset().await?;
    Ok(Redirect::to(TASK_LOG_PATH))
}
