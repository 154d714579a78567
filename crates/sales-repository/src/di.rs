//! Dependency injection module using Shaku.
//!
//! `RepositoryModule` holds the data source and the DAOs built on top of it.
//! Callers resolve `dyn CustomerDao` or `dyn DatabasePoolInterface` from it
//! through [`HasComponent`](sales_core::HasComponent).

use crate::{DatabasePool, DatabasePoolParameters, SqliteCustomerDaoImpl};
use sales_config::DatabaseConfig;
use sales_core::{module, SalesResult};
use sqlx::SqlitePool;
use std::sync::Arc;

// Repository layer module.
// Contains the database pool and the customer DAO that borrows from it.
module! {
    pub RepositoryModule {
        components = [
            DatabasePool,
            SqliteCustomerDaoImpl,
        ],
        providers = [],
    }
}

/// Connects a pool from configuration and builds the repository module.
pub async fn build_repository_module(config: &DatabaseConfig) -> SalesResult<Arc<RepositoryModule>> {
    let db_pool = DatabasePool::connect(config).await?;
    Ok(Arc::new(repository_module_from_pool(db_pool.inner().clone())))
}

/// Builds the repository module around an existing SQLx pool.
#[must_use]
pub fn repository_module_from_pool(pool: SqlitePool) -> RepositoryModule {
    RepositoryModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool })
        .build()
}
