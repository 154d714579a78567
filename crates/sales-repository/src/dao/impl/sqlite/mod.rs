//! SQLite DAO implementations.

mod customer_dao_impl;

pub use customer_dao_impl::SqliteCustomerDaoImpl;
