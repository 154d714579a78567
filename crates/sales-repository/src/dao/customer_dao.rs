//! CustomerDao trait — data access over CUSTOMER and PURCHASE_ORDER.
//!
//! Implementations translate each call into one parameterized statement
//! against a single data source. Zero matching rows is never an error: it
//! is reported as `0`, `None`, or an empty `Vec` depending on the method.
//! Any driver failure is reported as [`SalesError::Database`].
//!
//! [`SalesError::Database`]: sales_core::SalesError::Database

use async_trait::async_trait;
use sales_core::{CustomerEntity, CustomerId, Interface, SalesResult};

/// Customer data access object.
#[async_trait]
pub trait CustomerDao: Interface + Send + Sync {
    /// Counts the rows of the CUSTOMER table.
    async fn number_of_customers(&self) -> SalesResult<u64>;

    /// Deletes one customer by key. Returns the number of rows removed
    /// (`0` if no such customer, `1` otherwise).
    ///
    /// PURCHASE_ORDER rows referencing the customer are left alone. When
    /// the database enforces the foreign key, deleting a customer that still
    /// has orders fails with a constraint violation instead.
    async fn delete_customer(&self, customer_id: CustomerId) -> SalesResult<u64>;

    /// Counts the PURCHASE_ORDER rows placed by one customer.
    async fn number_of_orders_for_customer(&self, customer_id: CustomerId) -> SalesResult<u64>;

    /// Finds a customer by key.
    async fn find_customer(&self, customer_id: CustomerId) -> SalesResult<Option<CustomerEntity>>;

    /// Lists the customers located in a US state (2-character code), in the
    /// order the database returns them.
    async fn customers_in_state(&self, state: &str) -> SalesResult<Vec<CustomerEntity>>;
}
