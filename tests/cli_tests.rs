use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bike-tricks"))
        .args(args)
        .output()
        .expect("Failed to run bike-tricks")
}

#[test]
fn test_score_json_output() {
    let output = run_cli(&["score", "--format", "json", "L4B-R3A-H2C-T2E-S1D"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["difficulty"], serde_json::json!(22.0));
    assert_eq!(value["tricks"].as_array().unwrap().len(), 5);
}

#[test]
fn test_score_table_output() {
    let output = run_cli(&["score", "L2A-R1B"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cash Roll"));
    assert!(stdout.contains("Difficulty: 4.40"));
}

#[test]
fn test_score_rejects_oversized_count() {
    let output = run_cli(&["score", "L99999999999999999999999A"]);
    assert!(!output.status.success());
}

#[test]
fn test_batch_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sigs.csv");
    std::fs::write(&path, "L4B-H2C-R3A-S1D-T2E\nL1A-H1B-R1C-T1E\n").unwrap();

    let output = run_cli(&["batch", "--format", "json", "--file", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["sequence"]["difficulty"], serde_json::json!(15.8));
    assert_eq!(lines[1]["sequence"]["difficulty"], serde_json::json!(5.4));
}

#[test]
fn test_ride_invalid_exits_non_zero() {
    let output = run_cli(&["ride", "invalid-format"]);
    assert!(!output.status.success());
}

#[test]
fn test_ride_json() {
    let output = run_cli(&["ride", "--format", "json", "17121903-START-END-ROUTE"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"routeName\":\"ROUTE\""));
}

#[test]
fn test_ride_rejects_precision_flag() {
    let output = run_cli(&["ride", "--precision", "7", "17121903-A-B-C"]);
    assert!(!output.status.success());
}
