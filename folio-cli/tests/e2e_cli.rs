use assert_cmd::{cargo, prelude::*};
use predicates::prelude::*;
use serde_json::Value;
use std::process::Command;
use tempfile::TempDir;

fn setup_temp_home() -> TempDir {
    TempDir::new().expect("failed to create temp home")
}

/// `folio` with an isolated config directory and no log override.
fn folio(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("folio"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("FOLIO_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("failed to run folio");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn summary_for_single_month() {
    let home = setup_temp_home();
    folio(&home)
        .args(["summary", "--anchor", "2025-03-20", "--range", "1m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Last Month"))
        .stdout(predicate::str::contains("2025-03-01 to 2025-03-31"))
        .stdout(predicate::str::contains("$11,500"))
        .stdout(predicate::str::contains("+11,500"))
        .stdout(predicate::str::contains("Win Rate:    0%"));
}

#[test]
fn summary_without_anchor_is_unbounded() {
    let home = setup_temp_home();
    folio(&home)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("unbounded"))
        .stdout(predicate::str::contains("$14,000"))
        .stdout(predicate::str::contains("-500"))
        .stdout(predicate::str::contains("67%"));
}

#[test]
fn summary_json_has_metrics_and_interval() {
    let home = setup_temp_home();
    let value = json_output(folio(&home).args([
        "summary", "--anchor", "2025-06-10", "--range", "6m", "--json",
    ]));

    assert_eq!(value["range"], "6m");
    assert_eq!(value["interval"]["start"], "2024-12-01");
    assert_eq!(value["interval"]["end"], "2025-06-30");
    assert_eq!(value["total_value"], 14000);
    assert_eq!(value["daily_pl"], -500);
    assert_eq!(value["win_rate"], 67);
}

#[test]
fn unknown_range_falls_back_to_all() {
    let home = setup_temp_home();
    let value = json_output(folio(&home).args([
        "summary", "--anchor", "2025-03-20", "--range", "5y", "--json",
    ]));
    assert_eq!(value["range"], "all");
    assert!(value["interval"].is_null());
    assert_eq!(value["total_value"], 14000);
}

#[test]
fn series_filters_points() {
    let home = setup_temp_home();
    let value = json_output(folio(&home).args([
        "series", "--anchor", "2025-04-02", "--range", "1m", "--json",
    ]));
    let points = value.as_array().expect("array");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["value"], 13000);
}

#[test]
fn news_keeps_feed_order() {
    let home = setup_temp_home();
    let output = folio(&home)
        .args(["news", "--anchor", "2025-01-20", "--range", "1m"])
        .output()
        .expect("failed to run folio");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let dates: Vec<&str> = stdout.lines().filter_map(|l| l.split_whitespace().next()).collect();
    assert_eq!(dates, ["2025-01-15", "2025-01-14", "2025-01-13", "2025-01-12"]);
}

#[test]
fn news_outside_window_is_empty() {
    let home = setup_temp_home();
    folio(&home)
        .args(["news", "--anchor", "2025-05-01", "--range", "1m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No market updates"));
}

#[test]
fn allocation_shares_sum_to_one() {
    let home = setup_temp_home();
    let value = json_output(folio(&home).args(["allocation", "--json"]));
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["label"], "Stocks");
    let total: f64 = rows.iter().map(|r| r["share"].as_f64().unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn strategies_table_text() {
    let home = setup_temp_home();
    folio(&home)
        .arg("strategies")
        .assert()
        .success()
        .stdout(predicate::str::contains("Index Funds"))
        .stdout(predicate::str::contains("Growth Stocks"))
        .stdout(predicate::str::contains("+22%"))
        .stdout(predicate::str::contains("-8%"));
}

#[test]
fn invalid_anchor_fails() {
    let home = setup_temp_home();
    folio(&home)
        .args(["summary", "--anchor", "2025-13-40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--anchor"));
}

#[test]
fn config_file_supplies_defaults() {
    let home = setup_temp_home();
    let path = home.path().join("folio.toml");
    std::fs::write(
        &path,
        "[dashboard]\ndefault_range = \"1m\"\nanchor = \"2025-02-14\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();

    folio(&home)
        .arg("summary")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("$12,000"))
        .stdout(predicate::str::contains("+12,000"));
}

#[test]
fn broken_explicit_config_fails() {
    let home = setup_temp_home();
    let path = home.path().join("broken.toml");
    std::fs::write(&path, "[dashboard\n").unwrap();

    folio(&home)
        .arg("summary")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn broken_default_config_warns_and_uses_defaults() {
    let home = setup_temp_home();
    let config_dir = home.path().join(".config").join("folio");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[dashboard\n").unwrap();

    folio(&home)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$14,000"))
        .stderr(predicate::str::contains("ignoring config file, using defaults"));
}

#[test]
fn default_config_file_is_picked_up() {
    let home = setup_temp_home();
    let config_dir = home.path().join(".config").join("folio");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[dashboard]\ndefault_range = \"1m\"\nanchor = \"2025-03-20\"\n",
    )
    .unwrap();

    folio(&home)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$11,500"))
        .stderr(predicate::str::contains("loaded config"));
}

#[test]
fn rust_log_overrides_config_level() {
    let home = setup_temp_home();
    folio(&home)
        .env("RUST_LOG", "debug")
        .args(["summary", "--anchor", "2025-03-01", "--range", "1m"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved selection"));
}

#[test]
fn default_level_hides_debug_lines() {
    let home = setup_temp_home();
    folio(&home)
        .args(["summary", "--anchor", "2025-03-01", "--range", "1m"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved selection").not());
}
