//! Minimum-stock guard.
//!
//! Decides whether a decrement may be applied to a stock item without taking
//! its quantity below the configured floor. The check is a pure function of
//! its inputs: no IO, no logging, no hidden state.

use thiserror::Error;

use beerstock_core::{BeerId, DomainError, Quantity};

use crate::item::{DecrementRequest, StockItem};
use crate::policy::StockPolicy;

/// Rejection: removing `quantity` units from `item_id` would leave less than
/// the minimum allowed on hand.
///
/// Only constructed by [`check_decrement`] when
/// `current - quantity < minimum_allowed`; the fields are private and there
/// is no other constructor.
///
/// ```compile_fail
/// use beerstock_core::{BeerId, Quantity};
/// use beerstock_inventory::StockUnderLimit;
///
/// let _ = StockUnderLimit { item_id: BeerId::new(1), quantity: Quantity::ZERO };
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("Beers with {item_id} ID to decrement informed is below the min stock expected: {quantity}")]
pub struct StockUnderLimit {
    item_id: BeerId,
    quantity: Quantity,
}

impl StockUnderLimit {
    pub fn item_id(&self) -> BeerId {
        self.item_id
    }

    /// The decrement that was rejected.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

/// Anything a guarded decrement can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error(transparent)]
    UnderLimit(#[from] StockUnderLimit),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Check that `current_quantity - requested_decrement >= minimum_allowed`.
///
/// The floor is inclusive. A decrement larger than the stock on hand always
/// fails, whatever the floor.
pub fn check_decrement(
    item_id: BeerId,
    current_quantity: Quantity,
    requested_decrement: Quantity,
    minimum_allowed: Quantity,
) -> Result<(), StockUnderLimit> {
    match current_quantity.checked_sub(requested_decrement) {
        Some(remaining) if remaining >= minimum_allowed => Ok(()),
        _ => Err(StockUnderLimit {
            item_id,
            quantity: requested_decrement,
        }),
    }
}

/// Stock guard bound to a [`StockPolicy`].
///
/// Stateless apart from the policy, so it is `Copy` and can be shared freely
/// between threads.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StockGuard {
    policy: StockPolicy,
}

impl StockGuard {
    pub fn new(policy: StockPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> StockPolicy {
        self.policy
    }

    /// Check `request` against `item` under this guard's floor.
    pub fn check(&self, item: &StockItem, request: &DecrementRequest) -> Result<(), StockError> {
        if request.item_id != item.id {
            return Err(DomainError::invariant(format!(
                "decrement for item {} checked against item {}",
                request.item_id, item.id
            ))
            .into());
        }
        check_decrement(
            item.id,
            item.quantity,
            request.quantity,
            self.policy.minimum_allowed,
        )?;
        Ok(())
    }

    /// Quantity left on hand once `request` is applied to `item`.
    pub fn remaining_after(
        &self,
        item: &StockItem,
        request: &DecrementRequest,
    ) -> Result<Quantity, StockError> {
        self.check(item, request)?;
        // check() guarantees current >= decrement + floor.
        item.quantity
            .checked_sub(request.quantity)
            .ok_or_else(|| DomainError::invariant("stock cannot go negative").into())
    }
}
