//! Database connection pool management.
//!
//! [`DatabasePool`] is the data source handed to the DAOs. Its sizing and
//! timeouts come from [`DatabaseConfig`]; the DAOs only ever borrow from it.

use async_trait::async_trait;
use sales_config::DatabaseConfig;
use sales_core::{Interface, SalesError, SalesResult};
use shaku::Component;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Interface for database pool operations.
///
/// This trait abstracts the data source so DAOs can be handed any pool.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying SQLite pool.
    fn inner(&self) -> &SqlitePool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> SalesResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// Alias: [`connect`](Self::connect)
    pub async fn new(config: &DatabaseConfig) -> SalesResult<Self> {
        info!("Connecting to SQLite database...");

        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| connect_error("Invalid database URL", e))?
            .foreign_keys(config.foreign_keys);
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        let pool = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| connect_error("Failed to connect", e))?;

        info!(
            max_connections = config.max_connections,
            foreign_keys = config.foreign_keys,
            "SQLite connection pool established"
        );
        Ok(Self { pool })
    }

    /// Creates a new database pool from configuration.
    ///
    /// This is an alias for [`new`](Self::new).
    pub async fn connect(config: &DatabaseConfig) -> SalesResult<Self> {
        Self::new(config).await
    }

    /// Wraps a pool that was built elsewhere.
    #[must_use]
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> SalesResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| SalesError::Database {
                message: format!("Health check failed: {}", e),
                source: Some(Box::new(e)),
            })?;
        Ok(())
    }

    /// Closes the database pool.
    ///
    /// Waits for borrowed connections to come back; later acquisitions fail.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    async fn health_check(&self) -> SalesResult<()> {
        DatabasePool::health_check(self).await
    }

    async fn close(&self) {
        DatabasePool::close(self).await;
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .field("closed", &self.pool.is_closed())
            .finish()
    }
}

fn connect_error(context: &str, err: sqlx::Error) -> SalesError {
    warn!("{}: {}", context, err);
    SalesError::Database {
        message: format!("{}: {}", context, err),
        source: Some(Box::new(err)),
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> SalesResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(Arc::new(pool))
}
