//! Domain records projected out of the sales database.

pub mod entities;

pub use entities::*;
