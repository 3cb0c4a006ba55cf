//! Error responses for HTTP handlers.

use crate::task_log::{ports::CompletedTaskRepositoryError, services::TaskLogServiceError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The task log service failed.
    #[error(transparent)]
    Service(#[from] TaskLogServiceError),

    /// A page template failed to render.
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

impl HttpError {
    /// Returns the HTTP status code for this error.
    ///
    /// - Duplicate task: 409 Conflict
    /// - Everything else: 500 Internal Server Error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(TaskLogServiceError::Repository(
                CompletedTaskRepositoryError::DuplicateTask { .. },
            )) => StatusCode::CONFLICT,
            Self::Service(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
