use serde::{Deserialize, Serialize};

use beerstock_core::{BeerId, DomainResult, Quantity};

use crate::guard::{StockError, StockGuard};

/// Snapshot of a stock item as read from the persistence layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: BeerId,
    pub quantity: Quantity,
}

impl StockItem {
    pub fn new(id: BeerId, quantity: Quantity) -> Self {
        Self { id, quantity }
    }

    /// Check `request` against `guard` and return the item as it would look
    /// after the decrement.
    ///
    /// `self` is a snapshot. Serializing check and write against concurrent
    /// decrements of the same item is up to the store that owns it.
    pub fn decrement(
        &self,
        guard: &StockGuard,
        request: &DecrementRequest,
    ) -> Result<StockItem, StockError> {
        let quantity = guard.remaining_after(self, request)?;
        Ok(StockItem { id: self.id, quantity })
    }
}

/// Request to remove `quantity` units from item `item_id`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecrementRequest {
    pub item_id: BeerId,
    pub quantity: Quantity,
}

impl DecrementRequest {
    pub fn new(item_id: BeerId, quantity: Quantity) -> Self {
        Self { item_id, quantity }
    }

    /// Build a request from raw caller input.
    ///
    /// A negative amount is a caller contract violation and comes back as
    /// `DomainError::Validation`, not as a stock-limit failure.
    pub fn parse(item_id: BeerId, quantity: i64) -> DomainResult<Self> {
        Ok(Self {
            item_id,
            quantity: Quantity::try_from(quantity)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::StockPolicy;
    use beerstock_core::DomainError;

    #[test]
    fn parse_rejects_negative_decrement() {
        let err = DecrementRequest::parse(BeerId::new(1), -3).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn decrement_returns_reduced_copy() {
        let guard = StockGuard::new(StockPolicy::default());
        let item = StockItem::new(BeerId::new(1), Quantity::new(10));
        let request = DecrementRequest::new(BeerId::new(1), Quantity::new(4));

        let after = item.decrement(&guard, &request).unwrap();
        assert_eq!(after.quantity, Quantity::new(6));
        assert_eq!(after.id, item.id);
        assert_eq!(item.quantity, Quantity::new(10));
    }

    #[test]
    fn decrement_below_floor_is_rejected() {
        let guard = StockGuard::new(StockPolicy::new(Quantity::new(2)));
        let item = StockItem::new(BeerId::new(7), Quantity::new(5));
        let request = DecrementRequest::new(BeerId::new(7), Quantity::new(4));

        let err = item.decrement(&guard, &request).unwrap_err();
        assert!(matches!(err, StockError::UnderLimit(_)));
    }
}
