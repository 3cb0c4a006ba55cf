//! Serves the visitor greeter and the task log over HTTP.
//!
//! Usage:
//!
//! ```text
//! tasklog_server [--bind ADDR] [--database-url URL] [--pool-size N]
//!                [--owner-id ID] [--log-filter FILTER] [--seed]
//! ```
//!
//! Every option except `--seed` can also be supplied through its `TASKLOG_*`
//! environment variable. Without a database URL, tasks live in memory for the
//! lifetime of the process.

use clap::Parser;
use mockable::DefaultClock;
use std::sync::Arc;
use tasklog::config::{ServerConfig, Settings, StorageSettings};
use tasklog::http::{AppState, Templates, router};
use tasklog::task_log::{
    adapters::memory::InMemoryCompletedTaskRepository,
    adapters::postgres::{PostgresCompletedTaskRepository, build_pool, ensure_schema},
    ports::{CompletedTaskRepository, FixedUserProvider},
    services::TaskLogService,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let settings = ServerConfig::parse().into_settings()?;
    init_tracing(&settings.log_filter)?;

    match settings.storage.clone() {
        StorageSettings::InMemory => {
            warn!("no database URL configured, tasks are kept in memory");
            serve(Arc::new(InMemoryCompletedTaskRepository::new()), &settings).await
        }
        StorageSettings::Postgres { url, pool_size } => {
            let pool = tokio::task::spawn_blocking(move || {
                let connection_pool = build_pool(&url, pool_size)?;
                ensure_schema(&connection_pool)?;
                Ok::<_, BoxError>(connection_pool)
            })
            .await??;
            info!(pool_size = pool_size.get(), "connected to PostgreSQL");
            serve(Arc::new(PostgresCompletedTaskRepository::new(pool)), &settings).await
        }
    }
}

fn init_tracing(filter: &str) -> Result<(), BoxError> {
    let env_filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

async fn serve<R>(repository: Arc<R>, settings: &Settings) -> Result<(), BoxError>
where
    R: CompletedTaskRepository + 'static,
{
    let service = TaskLogService::new(
        repository,
        Arc::new(FixedUserProvider::new(settings.owner_id)),
        Arc::new(DefaultClock),
    );
    if settings.seed_on_start {
        service.ensure_seeded().await?;
    }

    let app = router(AppState::new(service, Templates::new()?));
    let listener = TcpListener::bind(settings.bind).await?;
    info!(addr = %settings.bind, owner_id = %settings.owner_id, "task log server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("task log server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
