//! Common test infrastructure for database integration tests.

#![allow(dead_code)]

use sales_config::DatabaseConfig;
use sales_repository::DatabasePool;
use std::sync::Arc;
use tempfile::TempDir;

const CREATE_CUSTOMER: &str = r#"
    CREATE TABLE CUSTOMER (
        CUSTOMER_ID  INTEGER PRIMARY KEY,
        NAME         VARCHAR(30),
        ADDRESSLINE1 VARCHAR(30),
        STATE        CHAR(2)
    )
"#;

const CREATE_PURCHASE_ORDER: &str = r#"
    CREATE TABLE PURCHASE_ORDER (
        ORDER_NUM   INTEGER PRIMARY KEY,
        CUSTOMER_ID INTEGER NOT NULL REFERENCES CUSTOMER (CUSTOMER_ID),
        QUANTITY    INTEGER
    )
"#;

/// Test database wrapper.
///
/// Owns a temporary directory holding a SQLite file with the CUSTOMER and
/// PURCHASE_ORDER tables, and a pool connected to it.
pub struct TestDatabase {
    dir: TempDir,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh database with foreign-key enforcement on.
    pub async fn new() -> Self {
        Self::with_foreign_keys(true).await
    }

    /// Creates a fresh database, choosing whether foreign keys are enforced.
    pub async fn with_foreign_keys(foreign_keys: bool) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("sales.db");

        let config = DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            min_connections: 1,
            max_connections: 4,
            connect_timeout_secs: 5,
            idle_timeout_secs: 600,
            log_queries: true,
            foreign_keys,
        };

        let pool = DatabasePool::new(&config)
            .await
            .expect("Failed to open test database");

        for ddl in [CREATE_CUSTOMER, CREATE_PURCHASE_ORDER] {
            sqlx::query(ddl)
                .execute(pool.inner())
                .await
                .expect("Failed to create schema");
        }

        Self {
            dir,
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Returns the directory that holds the database file.
    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Inserts one CUSTOMER row.
    pub async fn insert_customer(&self, id: i32, name: &str, address_line1: &str, state: &str) {
        sqlx::query(
            "INSERT INTO CUSTOMER (CUSTOMER_ID, NAME, ADDRESSLINE1, STATE) VALUES (?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(address_line1)
        .bind(state)
        .execute(self.pool.inner())
        .await
        .expect("Failed to insert customer");
    }

    /// Inserts one PURCHASE_ORDER row for the given customer.
    pub async fn insert_order(&self, order_num: i32, customer_id: i32) {
        sqlx::query("INSERT INTO PURCHASE_ORDER (ORDER_NUM, CUSTOMER_ID, QUANTITY) VALUES (?, ?, 1)")
            .bind(order_num)
            .bind(customer_id)
            .execute(self.pool.inner())
            .await
            .expect("Failed to insert order");
    }

    /// Counts CUSTOMER rows without going through the DAO.
    pub async fn raw_customer_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM CUSTOMER")
            .fetch_one(self.pool.inner())
            .await
            .expect("Failed to count customers")
    }

    /// Runs an arbitrary statement against the database.
    pub async fn execute(&self, sql: &str) {
        sqlx::query(sql)
            .execute(self.pool.inner())
            .await
            .expect("Failed to execute statement");
    }
}
