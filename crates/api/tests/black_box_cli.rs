use std::process::{Command, Output};

struct CheckRun {
    output: Output,
}

impl CheckRun {
    /// Run `beerstock-check` with `args`, with the floor set to `min_stock`
    /// (or unset when `None`).
    fn spawn(args: &[&str], min_stock: Option<&str>) -> Self {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_beerstock-check"));
        cmd.args(args).env("RUST_LOG", "off");
        match min_stock {
            Some(value) => cmd.env("BEERSTOCK_MIN_STOCK", value),
            None => cmd.env_remove("BEERSTOCK_MIN_STOCK"),
        };
        let output = cmd.output().expect("failed to run beerstock-check");
        Self { output }
    }

    fn exit_code(&self) -> Option<i32> {
        self.output.status.code()
    }

    fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout is not JSON")
    }

    fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }
}

#[test]
fn decrement_beyond_stock_is_rejected() {
    let run = CheckRun::spawn(&["1", "10", "11"], None);
    assert_eq!(run.exit_code(), Some(1));

    let out = run.stdout_json();
    assert_eq!(out["status"], 400);
    assert_eq!(out["body"]["error"], "stock_under_limit");
    assert_eq!(out["body"]["item_id"], 1);
    assert_eq!(out["body"]["quantity"], 11);
}

#[test]
fn decrement_onto_configured_floor_is_allowed() {
    let run = CheckRun::spawn(&["7", "5", "3"], Some("2"));
    assert_eq!(run.exit_code(), Some(0));

    let out = run.stdout_json();
    assert_eq!(out["status"], 200);
    assert_eq!(out["remaining"], 2);
}

#[test]
fn decrement_crossing_configured_floor_is_rejected() {
    let run = CheckRun::spawn(&["7", "5", "4"], Some("2"));
    assert_eq!(run.exit_code(), Some(1));

    let out = run.stdout_json();
    assert_eq!(out["status"], 400);
    assert_eq!(out["body"]["error"], "stock_under_limit");
    assert_eq!(out["body"]["quantity"], 4);
}

#[test]
fn negative_decrement_is_a_validation_error() {
    let run = CheckRun::spawn(&["1", "10", "-3"], None);
    assert_eq!(run.exit_code(), Some(1));

    let out = run.stdout_json();
    assert_eq!(out["status"], 400);
    assert_eq!(out["body"]["error"], "validation_error");
    assert!(out["body"].get("item_id").is_none());
}

#[test]
fn malformed_id_is_reported() {
    let run = CheckRun::spawn(&["beer-1", "10", "1"], None);
    assert_eq!(run.exit_code(), Some(1));
    assert_eq!(run.stdout_json()["body"]["error"], "invalid_id");
}

#[test]
fn missing_arguments_print_usage() {
    let run = CheckRun::spawn(&[], None);
    assert!(!run.output.status.success());
    assert!(run.output.stdout.is_empty());
    assert!(run.stderr().contains("usage: beerstock-check"));
}

#[test]
fn invalid_floor_refuses_to_run() {
    let run = CheckRun::spawn(&["7", "5", "5"], Some("abc"));
    assert!(!run.output.status.success());
    assert!(run.output.stdout.is_empty());
    assert!(run.stderr().contains("BEERSTOCK_MIN_STOCK"));
}
