//! Translation table from domain failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use beerstock_core::{BeerId, DomainError, Quantity};
use beerstock_inventory::StockError;

/// JSON body returned for a failed stock operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<BeerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
}

/// Status code and error code for a domain error.
pub fn domain_status(err: &DomainError) -> (StatusCode, &'static str) {
    match err {
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        DomainError::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid_id"),
        DomainError::InvariantViolation(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation")
        }
    }
}

/// Status code and error code for a guarded stock operation.
pub fn status_for(err: &StockError) -> (StatusCode, &'static str) {
    match err {
        StockError::UnderLimit(_) => (StatusCode::BAD_REQUEST, "stock_under_limit"),
        StockError::Domain(e) => domain_status(e),
    }
}

pub fn error_body(err: &StockError) -> ErrorBody {
    let (_, code) = status_for(err);
    let (item_id, quantity) = match err {
        StockError::UnderLimit(e) => (Some(e.item_id()), Some(e.quantity())),
        StockError::Domain(_) => (None, None),
    };
    ErrorBody {
        error: code,
        message: err.to_string(),
        item_id,
        quantity,
    }
}

pub fn stock_error_to_response(err: StockError) -> axum::response::Response {
    let (status, _) = status_for(&err);
    if let StockError::UnderLimit(e) = &err {
        tracing::debug!(
            item_id = %e.item_id(),
            quantity = %e.quantity(),
            "decrement rejected by stock floor"
        );
    }
    (status, axum::Json(error_body(&err))).into_response()
}
