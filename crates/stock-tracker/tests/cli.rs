// File: crates/stock-tracker/tests/cli.rs
// Purpose: Run the binary against CSVs in a temp directory.

use std::path::Path;
use std::process::Command;

fn write_csv(dir: &Path, symbol: &str, rows: usize) {
    let mut text = String::from("Date,Open,High,Low,Close,Adj Close,Volume\n");
    for i in 0..rows {
        let (month, day) = (i / 28 + 1, i % 28 + 1);
        text.push_str(&format!("2022-{month:02}-{day:02},1,1,1,{}.5,1,10\n", 10 + i));
    }
    std::fs::write(dir.join(format!("{symbol}.csv")), text).unwrap();
}

fn tracker() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stock-tracker"))
}

#[test]
fn renders_chart_and_prints_path() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "AAA", 60);
    write_csv(dir.path(), "BBB", 20);
    let out = dir.path().join("charts/cmp.png");

    let result = tracker()
        .arg("--data-dir").arg(dir.path())
        .arg("--out").arg(&out)
        .args(["--width", "480", "--height", "320", "1_month", "AAA", "BBB"])
        .output()
        .unwrap();

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert_eq!(stdout.trim(), out.display().to_string());
    let png = std::fs::read(&out).unwrap();
    assert!(png.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn missing_symbol_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "AAA", 5);
    let result = tracker()
        .arg("--data-dir").arg(dir.path())
        .arg("--out").arg(dir.path().join("x.png"))
        .args(["max", "AAA", "NOPE"])
        .output()
        .unwrap();
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("NOPE.csv"));
    assert!(!dir.path().join("x.png").exists());
}

#[test]
fn unknown_option_prints_usage() {
    let result = tracker().args(["--colour", "red", "AAA"]).output().unwrap();
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("usage: stock-tracker"));
}

#[test]
fn mistyped_window_is_rejected_before_loading() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "AAA", 5);
    let result = tracker()
        .arg("--data-dir").arg(dir.path())
        .args(["1_years", "AAA"])
        .output()
        .unwrap();
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("unknown time window '1_years'"), "stderr: {stderr}");
    assert!(!stderr.contains("1_years.csv"));
}
