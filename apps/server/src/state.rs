//! Shared application state

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, DatabaseConfig};
use crate::db::{
    DirectoryStore, EmployeeSearchStore, PostgresDirectoryRepository, PostgresEmployeeStore,
};
use crate::services::{DirectoryService, SearchService};
use crate::{Error, Result};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Present when backed by PostgreSQL; used for pool gauges.
    pub db_pool: Option<PgPool>,
    pub search_service: Arc<SearchService>,
    pub directory_service: Arc<DirectoryService>,
}

impl AppState {
    /// Connect to PostgreSQL, apply migrations if enabled, and wire the services.
    pub async fn new(config: Config) -> Result<Self> {
        let pool = connect_pool(&config.database).await?;
        if config.database.run_migrations {
            run_migrations(&pool).await?;
        }

        let search_store: Arc<dyn EmployeeSearchStore> =
            Arc::new(PostgresEmployeeStore::new(pool.clone()));
        let directory_store: Arc<dyn DirectoryStore> =
            Arc::new(PostgresDirectoryRepository::new(pool.clone()));

        let mut state = Self::with_stores(config, search_store, directory_store);
        state.db_pool = Some(pool);
        Ok(state)
    }

    /// Wire the services over arbitrary stores (used by tests and the CLI).
    pub fn with_stores(
        config: Config,
        search_store: Arc<dyn EmployeeSearchStore>,
        directory_store: Arc<dyn DirectoryStore>,
    ) -> Self {
        let search_service = SearchService::new(search_store, config.search.clone());
        let directory_service = DirectoryService::new(directory_store);

        Self {
            config: Arc::new(config),
            db_pool: None,
            search_service: Arc::new(search_service),
            directory_service: Arc::new(directory_service),
        }
    }
}

pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let statement_timeout = config.statement_timeout_seconds;

    let pool = PgPoolOptions::new()
        .min_connections(config.pool_min_size)
        .max_connections(config.pool_max_size)
        .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                if statement_timeout > 0 {
                    sqlx::query(&format!(
                        "SET statement_timeout = '{}s'",
                        statement_timeout
                    ))
                    .execute(conn)
                    .await?;
                }
                Ok(())
            })
        })
        .connect(&config.url)
        .await
        .map_err(Error::Database)?;

    tracing::info!(
        min_connections = config.pool_min_size,
        max_connections = config.pool_max_size,
        "Database pool ready"
    );

    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| Error::Internal(format!("Failed to run migrations: {}", e)))?;

    tracing::info!("Database migrations applied");
    Ok(())
}
