//! Stock quantities.
//!
//! Quantities are non-negative by construction, so a negative stock level or a
//! negative decrement can never reach the stock guard. Raw signed input is
//! validated once, at the edge, through `TryFrom<i64>`.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A non-negative count of units on hand (or to be removed).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// `self - other`, or `None` if the result would be negative.
    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_sub(other.0).map(Quantity)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(DomainError::validation(format!(
                "quantity cannot be negative (got {value})"
            )));
        }
        u32::try_from(value)
            .map(Quantity)
            .map_err(|_| DomainError::validation(format!("quantity too large (got {value})")))
    }
}
