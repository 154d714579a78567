//! # Sales Repository
//!
//! Data access for the CUSTOMER and PURCHASE_ORDER tables:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn CustomerDao>            (DAO interface)
//! SqliteCustomerDaoImpl                (DAO impl — SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>  (data source)
//! SQLite
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                          ← DatabasePool (data source)
//!   di.rs                            ← RepositoryModule wiring
//!   dao/
//!     customer_dao.rs                ← CustomerDao trait
//!     impl/
//!       sqlite/
//!         customer_dao_impl.rs       ← SqliteCustomerDaoImpl
//! ```
//!
//! Every DAO call borrows one pooled connection for a single statement and
//! hands it back before returning, whether the call succeeds or fails.

pub mod dao;
pub mod di;
pub mod pool;

pub use dao::{CustomerDao, SqliteCustomerDaoImpl};
pub use di::*;
pub use pool::*;
