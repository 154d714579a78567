//! # Sales Core
//!
//! Core types shared by the sales data-access crates: the customer
//! projection, typed identifiers, the unified error type, and logging
//! initialization.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
