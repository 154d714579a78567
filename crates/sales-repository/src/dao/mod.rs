//! DAO (Data Access Object) layer.
//!
//! Each DAO interface maps to one data source; implementations live under
//! the `impl` submodule, organized by technology.

pub mod customer_dao;
pub mod r#impl;

pub use customer_dao::CustomerDao;
pub use r#impl::SqliteCustomerDaoImpl;
