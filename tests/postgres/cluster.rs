//! Cluster lifecycle helpers for `PostgreSQL` integration tests.

use postgresql_embedded::{PostgreSQL, Settings, Status};
use rstest::fixture;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

static SHARED_CLUSTER: OnceLock<ManagedCluster> = OnceLock::new();

/// Shared `PostgreSQL` cluster handle for integration tests.
pub type PostgresCluster = &'static ManagedCluster;

/// Embedded `PostgreSQL` cluster kept alive for the whole test binary.
pub struct ManagedCluster {
    runtime: Runtime,
    postgres: PostgreSQL,
}

impl ManagedCluster {
    fn new() -> Result<Self, BoxError> {
        let runtime = test_runtime()?;
        let mut postgres = PostgreSQL::new(Settings::default());
        runtime.block_on(async {
            postgres.setup().await?;
            if !matches!(postgres.status(), Status::Started) {
                postgres.start().await?;
            }
            Ok::<(), postgresql_embedded::Error>(())
        })?;
        Ok(Self { runtime, postgres })
    }

    /// Returns the connection URL for `database`.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        self.postgres.settings().url(database)
    }

    /// Creates an empty database.
    pub fn create_database(&self, database: &str) -> Result<(), BoxError> {
        self.runtime
            .block_on(self.postgres.create_database(database))
            .map_err(|err| Box::new(err) as BoxError)
    }

    /// Drops a database created by [`Self::create_database`].
    pub fn drop_database(&self, database: &str) -> Result<(), BoxError> {
        self.runtime
            .block_on(self.postgres.drop_database(database))
            .map_err(|err| Box::new(err) as BoxError)
    }
}

/// Builds a runtime for driving async adapters from synchronous tests.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| Box::new(err) as BoxError)
}

/// Fixture returning the shared cluster, starting it on first use.
#[fixture]
pub fn postgres_cluster() -> PostgresCluster {
    shared_cluster()
}

fn shared_cluster() -> PostgresCluster {
    if let Some(cluster) = SHARED_CLUSTER.get() {
        return cluster;
    }
    match ManagedCluster::new() {
        Ok(cluster) => SHARED_CLUSTER.get_or_init(|| cluster),
        Err(err) => panic!("SKIP-TEST-CLUSTER: failed to start PostgreSQL: {err}"),
    }
}
