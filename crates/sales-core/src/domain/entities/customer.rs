//! Customer entity.

use crate::CustomerId;
use serde::{Deserialize, Serialize};

/// In-memory projection of one CUSTOMER row.
///
/// Carries the key, the name, and the first address line. Instances are
/// only built from query results and are never written back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerEntity {
    /// CUSTOMER_ID column.
    pub customer_id: CustomerId,

    /// NAME column.
    pub name: String,

    /// ADDRESSLINE1 column.
    pub address_line1: String,
}

impl CustomerEntity {
    #[must_use]
    pub fn new(
        customer_id: impl Into<CustomerId>,
        name: impl Into<String>,
        address_line1: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            address_line1: address_line1.into(),
        }
    }
}
