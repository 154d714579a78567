//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module (e.g. `customer_dao.rs`).

pub mod sqlite;

pub use sqlite::SqliteCustomerDaoImpl;
