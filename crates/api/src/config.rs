//! Process configuration for the stock guard.

use std::env::VarError;

use beerstock_core::{DomainError, DomainResult, Quantity};
use beerstock_inventory::StockPolicy;

/// Environment variable holding the minimum stock on hand.
pub const MIN_STOCK_VAR: &str = "BEERSTOCK_MIN_STOCK";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StockConfig {
    pub policy: StockPolicy,
}

impl StockConfig {
    pub fn from_env() -> DomainResult<Self> {
        let raw = match std::env::var(MIN_STOCK_VAR) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                return Err(DomainError::validation(format!(
                    "{MIN_STOCK_VAR} is not valid unicode"
                )));
            }
        };
        Self::from_lookup(|_| raw.clone())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// An unset floor means 0. A floor that is set but does not parse as a
    /// non-negative integer is an error, never a silent 0.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let minimum_allowed = match lookup(MIN_STOCK_VAR) {
            None => Quantity::ZERO,
            Some(raw) => parse_quantity(&raw)?,
        };

        Ok(Self {
            policy: StockPolicy::new(minimum_allowed),
        })
    }
}

fn parse_quantity(raw: &str) -> DomainResult<Quantity> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| DomainError::validation(format!("{MIN_STOCK_VAR}={raw:?}: {e}")))?;
    Quantity::try_from(value)
}
