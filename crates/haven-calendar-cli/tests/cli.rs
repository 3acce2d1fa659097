//! End-to-end tests for the havencal binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn havencal() -> Command {
    Command::cargo_bin("havencal").expect("binary builds")
}

fn stdout_json(assert: assert_cmd::assert::Assert) -> Value {
    let out = assert.get_output().stdout.clone();
    serde_json::from_slice(&out).expect("stdout is JSON")
}

#[test]
fn grid_emits_42_cells() {
    let assert = havencal()
        .args([
            "grid",
            "--year",
            "2026",
            "--month",
            "2",
            "--today",
            "2026-02-09",
        ])
        .assert()
        .success();

    let days = stdout_json(assert);
    let days = days.as_array().expect("grid is an array");
    assert_eq!(days.len(), 42);
    assert_eq!(days[0]["date"], "2026-02-01");
    assert_eq!(days[0]["is_current_month"], true);
}

#[test]
fn grid_classifies_booked_and_past_days() {
    let assert = havencal()
        .args([
            "grid",
            "--year",
            "2026",
            "--month",
            "2",
            "--today",
            "2026-02-09",
            "--booked",
            "2026-02-14,2026-02-15",
            "--blocked",
            "2026-02-20",
        ])
        .assert()
        .success();

    let days = stdout_json(assert);
    let day = |date: &str| {
        days.as_array()
            .unwrap()
            .iter()
            .find(|d| d["date"] == date)
            .unwrap()
            .clone()
    };
    assert_eq!(day("2026-02-14")["is_booked"], true);
    assert_eq!(day("2026-02-20")["is_blocked"], true);
    assert_eq!(day("2026-02-08")["is_past"], true);
    assert_eq!(day("2026-02-09")["is_past"], false);
}

#[test]
fn grid_rejects_invalid_month() {
    havencal()
        .args(["grid", "--year", "2026", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn select_replays_a_tap_sequence() {
    let assert = havencal()
        .args([
            "select",
            "--year",
            "2026",
            "--month",
            "2",
            "--today",
            "2026-02-01",
            "--press",
            "2026-02-10",
            "--press",
            "2026-02-15",
            "--press",
            "2026-02-05",
        ])
        .assert()
        .success();

    // The third press lands while the range is complete, so it restarts.
    let range = stdout_json(assert);
    assert_eq!(range["start"], "2026-02-05");
    assert_eq!(range["end"], Value::Null);
}

#[test]
fn select_ignores_presses_on_unavailable_days() {
    let assert = havencal()
        .args([
            "select",
            "--year",
            "2026",
            "--month",
            "2",
            "--today",
            "2026-02-01",
            "--booked",
            "2026-02-14",
            "--press",
            "2026-02-10",
            "--press",
            "2026-02-14",
        ])
        .assert()
        .success();

    let range = stdout_json(assert);
    assert_eq!(range["start"], "2026-02-10");
    assert_eq!(range["end"], Value::Null);
}

#[test]
fn bars_clip_to_the_week_row() {
    let intervals = r#"[
        {"title": "Archie Break", "start_day": 26, "end_day": 28, "status": "approved"}
    ]"#;
    let assert = havencal()
        .args([
            "bars",
            "--year",
            "2026",
            "--month",
            "2",
            "--intervals",
            intervals,
        ])
        .assert()
        .success();

    let rows = stdout_json(assert);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    // Feb 2026: days 26-28 live in row 3 (22-28); every other row is clear.
    let bar = &rows[3].as_array().unwrap()[0];
    assert_eq!(bar["label"], "Archie Break");
    assert!((bar["left_percent"].as_f64().unwrap() - 400.0 / 7.0).abs() < 1e-9);
    assert!((bar["width_percent"].as_f64().unwrap() - 300.0 / 7.0).abs() < 1e-9);
    assert!(rows[0].as_array().unwrap().is_empty());
}

#[test]
fn best_discount_picks_largest_savings() {
    let discounts = r#"[
        {"id": 1, "code": "FLAT100", "name": "Flat", "discount_type": "fixed",
         "discount_value": 100.0, "start_date": "2026-01-01", "end_date": "2026-12-31"},
        {"id": 2, "code": "PCT15", "name": "Percent", "discount_type": "percentage",
         "discount_value": 15.0, "start_date": "2026-01-01", "end_date": "2026-12-31"}
    ]"#;
    let assert = havencal()
        .args(["best-discount", "--price", "1000", "--discounts", discounts])
        .assert()
        .success();

    let best = stdout_json(assert);
    assert_eq!(best["discount"]["code"], "PCT15");
    assert_eq!(best["savings"], 150.0);
    assert_eq!(best["discounted_price"], 850.0);
}

#[test]
fn best_discount_emits_null_when_nothing_is_eligible() {
    let discounts = r#"[
        {"id": 1, "code": "BIG", "name": "Big spender", "discount_type": "fixed",
         "discount_value": 500.0, "min_booking_amount": 5000.0,
         "start_date": "2026-01-01", "end_date": "2026-12-31"}
    ]"#;
    havencal()
        .args(["best-discount", "--price", "1000", "--discounts", discounts])
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
}
