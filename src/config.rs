//! Server configuration from command-line flags and environment variables.

use crate::task_log::domain::{OwnerId, TaskLogDomainError};
use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use thiserror::Error;

/// Raw configuration accepted by the `tasklog_server` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "tasklog_server")]
#[command(version, about = "Visitor greeter and paginated task log", long_about = None)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "TASKLOG_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// `PostgreSQL` connection URL; tasks are kept in memory when absent.
    #[arg(long, env = "TASKLOG_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TASKLOG_POOL_SIZE", default_value_t = 4)]
    pub pool_size: u32,

    /// Identifier of the single user whose task log is served.
    #[arg(long, env = "TASKLOG_OWNER_ID", default_value_t = 1)]
    pub owner_id: i64,

    /// Log filter directives, e.g. `info` or `tasklog=debug`.
    #[arg(long, env = "TASKLOG_LOG", default_value = "info")]
    pub log_filter: String,

    /// Insert any missing demonstration tasks before serving.
    #[arg(long)]
    pub seed: bool,
}

/// Where completed tasks are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageSettings {
    /// Process-local storage, lost on exit.
    InMemory,
    /// `PostgreSQL` storage.
    Postgres {
        /// Connection URL.
        url: String,
        /// Maximum pooled connections.
        pool_size: NonZeroU32,
    },
}

/// Validated server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Listen address.
    pub bind: SocketAddr,
    /// Storage backend.
    pub storage: StorageSettings,
    /// Owner served by the fixed identity provider.
    pub owner_id: OwnerId,
    /// Log filter directives.
    pub log_filter: String,
    /// Whether to seed demonstration tasks at start-up.
    pub seed_on_start: bool,
}

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The pool size was zero.
    #[error("pool size must be at least 1")]
    ZeroPoolSize,

    /// The database URL was blank.
    #[error("database URL must not be empty")]
    EmptyDatabaseUrl,

    /// The owner identifier was rejected by the domain.
    #[error(transparent)]
    Owner(#[from] TaskLogDomainError),
}

impl ServerConfig {
    /// Validates the raw configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the pool size is zero, the database URL
    /// is blank, or the owner identifier is not positive.
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let owner_id = OwnerId::new(self.owner_id)?;
        let pool_size = NonZeroU32::new(self.pool_size).ok_or(ConfigError::ZeroPoolSize)?;
        let storage = match self.database_url {
            None => StorageSettings::InMemory,
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyDatabaseUrl),
            Some(url) => StorageSettings::Postgres { url, pool_size },
        };
        Ok(Settings {
            bind: self.bind,
            storage,
            owner_id,
            log_filter: self.log_filter,
            seed_on_start: self.seed,
        })
    }
}
