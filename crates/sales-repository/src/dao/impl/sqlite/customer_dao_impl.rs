//! SQLite implementation of [`CustomerDao`].

use crate::dao::CustomerDao;
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use sales_core::{CustomerEntity, CustomerId, SalesError, SalesResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, error};

const NUMBER_OF_CUSTOMERS_SQL: &str = "SELECT COUNT(*) AS NUMBER FROM CUSTOMER";
const DELETE_CUSTOMER_SQL: &str = "DELETE FROM CUSTOMER WHERE CUSTOMER_ID = ?";
const NUMBER_OF_ORDERS_SQL: &str = "SELECT COUNT(*) AS NUMBER FROM PURCHASE_ORDER WHERE CUSTOMER_ID = ?";
const FIND_CUSTOMER_SQL: &str = "SELECT * FROM CUSTOMER WHERE CUSTOMER_ID = ?";
const CUSTOMERS_IN_STATE_SQL: &str = "SELECT * FROM CUSTOMER WHERE STATE = ?";

/// SQLx-backed customer DAO.
///
/// Holds nothing but the shared data source, so one instance can serve any
/// number of concurrent callers.
#[derive(Component, Clone)]
#[shaku(interface = CustomerDao)]
pub struct SqliteCustomerDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteCustomerDaoImpl {
    /// Creates a new customer DAO over the given data source.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// The CUSTOMER columns projected into [`CustomerEntity`].
///
/// Other columns returned by `SELECT *` are ignored.
#[derive(Debug, FromRow)]
struct CustomerRow {
    #[sqlx(rename = "CUSTOMER_ID")]
    customer_id: i32,
    #[sqlx(rename = "NAME")]
    name: Option<String>,
    #[sqlx(rename = "ADDRESSLINE1")]
    address_line1: Option<String>,
}

impl From<CustomerRow> for CustomerEntity {
    fn from(row: CustomerRow) -> Self {
        CustomerEntity {
            customer_id: CustomerId::new(row.customer_id),
            name: row.name.unwrap_or_default(),
            address_line1: row.address_line1.unwrap_or_default(),
        }
    }
}

/// Logs the driver error for the named operation, then wraps it.
fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> SalesError {
    move |err| {
        error!(operation, error = %err, "Database operation failed");
        SalesError::from(err)
    }
}

fn to_count(count: Option<i64>) -> u64 {
    count.map_or(0, |n| n as u64)
}

#[async_trait]
impl CustomerDao for SqliteCustomerDaoImpl {
    async fn number_of_customers(&self) -> SalesResult<u64> {
        debug!("Counting customers");

        let count: Option<i64> = sqlx::query_scalar(NUMBER_OF_CUSTOMERS_SQL)
            .fetch_optional(self.pool.inner())
            .await
            .map_err(database_error("number_of_customers"))?;

        Ok(to_count(count))
    }

    async fn delete_customer(&self, customer_id: CustomerId) -> SalesResult<u64> {
        debug!("Deleting customer: {}", customer_id);

        let result = sqlx::query(DELETE_CUSTOMER_SQL)
            .bind(customer_id.into_inner())
            .execute(self.pool.inner())
            .await
            .map_err(database_error("delete_customer"))?;

        Ok(result.rows_affected())
    }

    async fn number_of_orders_for_customer(&self, customer_id: CustomerId) -> SalesResult<u64> {
        debug!("Counting orders for customer: {}", customer_id);

        let count: Option<i64> = sqlx::query_scalar(NUMBER_OF_ORDERS_SQL)
            .bind(customer_id.into_inner())
            .fetch_optional(self.pool.inner())
            .await
            .map_err(database_error("number_of_orders_for_customer"))?;

        Ok(to_count(count))
    }

    async fn find_customer(&self, customer_id: CustomerId) -> SalesResult<Option<CustomerEntity>> {
        debug!("Finding customer by id: {}", customer_id);

        let row = sqlx::query_as::<_, CustomerRow>(FIND_CUSTOMER_SQL)
            .bind(customer_id.into_inner())
            .fetch_optional(self.pool.inner())
            .await
            .map_err(database_error("find_customer"))?;

        Ok(row.map(CustomerEntity::from))
    }

    async fn customers_in_state(&self, state: &str) -> SalesResult<Vec<CustomerEntity>> {
        debug!("Finding customers in state: {}", state);

        let rows = sqlx::query_as::<_, CustomerRow>(CUSTOMERS_IN_STATE_SQL)
            .bind(state)
            .fetch_all(self.pool.inner())
            .await
            .map_err(database_error("customers_in_state"))?;

        Ok(rows.into_iter().map(CustomerEntity::from).collect())
    }
}

impl std::fmt::Debug for SqliteCustomerDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteCustomerDaoImpl").finish_non_exhaustive()
    }
}
