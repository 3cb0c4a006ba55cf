//! Shared application state for HTTP handlers.

use super::Templates;
use crate::task_log::{
    ports::{CompletedTaskRepository, CurrentUserProvider},
    services::TaskLogService,
};
use mockable::Clock;
use std::sync::Arc;

/// Dependencies shared by every handler.
pub struct AppState<R, U, C>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    service: TaskLogService<R, U, C>,
    templates: Arc<Templates>,
}

impl<R, U, C> Clone for AppState<R, U, C>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            templates: Arc::clone(&self.templates),
        }
    }
}

impl<R, U, C> AppState<R, U, C>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    /// Creates handler state from a service and loaded templates.
    #[must_use]
    pub fn new(service: TaskLogService<R, U, C>, templates: Templates) -> Self {
        Self {
            service,
            templates: Arc::new(templates),
        }
    }

    /// Returns the task log service.
    #[must_use]
    pub const fn service(&self) -> &TaskLogService<R, U, C> {
        &self.service
    }

    /// Returns the loaded templates.
    #[must_use]
    pub fn templates(&self) -> &Templates {
        &self.templates
    }
}
