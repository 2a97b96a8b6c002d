//! API edge: configuration and failure-to-HTTP translation.
//!
//! Routing and persistence live with the hosting service; this crate only
//! gives it what it needs to turn stock-guard outcomes into responses.

pub mod config;
pub mod errors;

pub use config::StockConfig;
pub use errors::{ErrorBody, status_for, stock_error_to_response};
