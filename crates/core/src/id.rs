//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a beer stock item.
///
/// Opaque to the guard: it is only compared and rendered into diagnostics.
/// Lookup by id is the persistence layer's job.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeerId(i64);

impl BeerId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for BeerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for BeerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<BeerId> for i64 {
    fn from(value: BeerId) -> Self {
        value.0
    }
}

impl FromStr for BeerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("BeerId: {e}")))?;
        Ok(Self(value))
    }
}
