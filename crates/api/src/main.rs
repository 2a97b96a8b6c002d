use std::process::ExitCode;

use anyhow::{Context, bail};

use beerstock_api::{StockConfig, errors::error_body, status_for};
use beerstock_core::{BeerId, Quantity};
use beerstock_inventory::{DecrementRequest, StockError, StockGuard, StockItem};

const USAGE: &str = "usage: beerstock-check <id> <current-quantity> <decrement>";

fn main() -> anyhow::Result<ExitCode> {
    beerstock_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [id, current, decrement] = args.as_slice() else {
        bail!(USAGE);
    };

    let config = StockConfig::from_env().context("loading stock configuration")?;
    let guard = StockGuard::new(config.policy);

    match run(&guard, id, current, decrement) {
        Ok(remaining) => {
            tracing::info!(item_id = %id, %remaining, "decrement allowed");
            println!("{}", serde_json::json!({ "status": 200, "remaining": remaining }));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let (status, _) = status_for(&err);
            tracing::info!(item_id = %id, status = status.as_u16(), "decrement rejected");
            let body = serde_json::to_value(error_body(&err)).context("encoding error body")?;
            println!("{}", serde_json::json!({ "status": status.as_u16(), "body": body }));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(
    guard: &StockGuard,
    id: &str,
    current: &str,
    decrement: &str,
) -> Result<Quantity, StockError> {
    let id: BeerId = id.parse()?;
    let current = Quantity::try_from(parse_int(current)?)?;
    let request = DecrementRequest::parse(id, parse_int(decrement)?)?;

    let item = StockItem::new(id, current);
    let after = item.decrement(guard, &request)?;
    Ok(after.quantity)
}

fn parse_int(raw: &str) -> Result<i64, beerstock_core::DomainError> {
    raw.trim()
        .parse()
        .map_err(|e| beerstock_core::DomainError::validation(format!("{raw:?}: {e}")))
}
