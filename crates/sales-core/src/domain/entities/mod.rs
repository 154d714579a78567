//! Domain entities.

mod customer;

pub use customer::CustomerEntity;
