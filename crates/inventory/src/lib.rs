//! Inventory domain module.
//!
//! This crate contains the stock-on-hand rules for beer inventory, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage, no logging).

pub mod guard;
pub mod item;
pub mod policy;

pub use guard::{StockError, StockGuard, StockUnderLimit, check_decrement};
pub use item::{DecrementRequest, StockItem};
pub use policy::StockPolicy;
