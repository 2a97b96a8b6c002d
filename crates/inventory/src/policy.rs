use serde::{Deserialize, Serialize};

use beerstock_core::Quantity;

/// Minimum-stock-on-hand policy.
///
/// The floor is a business rule supplied from configuration; nothing in this
/// crate hard-codes it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPolicy {
    pub minimum_allowed: Quantity,
}

impl StockPolicy {
    pub fn new(minimum_allowed: Quantity) -> Self {
        Self { minimum_allowed }
    }
}
