//! Integration tests for the tasgrid binary.
//!
//! Each test runs the built binary with HOME pointed at a temporary
//! directory, so config and log files never touch the real home directory.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Run the binary with an isolated home directory.
fn tasgrid(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tasgrid"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run tasgrid")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_resolve_goose() {
    let home = TempDir::new().unwrap();
    let output = tasgrid(home.path(), &["resolve", "GOO", "545", "519"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("554500"));
    assert!(text.contains("5551900"));
    assert!(text.contains("-40.181512"));
    assert!(text.contains("147.640171"));
    assert!(text.contains("53.4"));
    assert!(text.contains("24.6"));
}

#[test]
fn test_resolve_writes_log_file() {
    let home = TempDir::new().unwrap();
    let output = tasgrid(home.path(), &["resolve", "goo", "545", "519"]);
    assert!(output.status.success());

    let log = home.path().join(".tasgrid").join("logs").join("tasgrid.log");
    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("Built sheet table"));
}

#[test]
fn test_resolve_unknown_sheet_fails() {
    let home = TempDir::new().unwrap();
    let output = tasgrid(home.path(), &["resolve", "XYZ", "545", "519"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Sheet 'XYZ' not found"));
    assert!(stderr(&output).contains("tasgrid sheets"));
}

#[test]
fn test_resolve_malformed_reference_fails() {
    let home = TempDir::new().unwrap();
    let output = tasgrid(home.path(), &["resolve", "GOO", "5450", "519"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("must be exactly 3 digits"));
}

#[test]
fn test_resolve_out_of_range_fails() {
    let home = TempDir::new().unwrap();
    let output = tasgrid(home.path(), &["resolve", "GOO", "300", "519"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("out of the expected range"));
}

#[test]
fn test_distance() {
    let home = TempDir::new().unwrap();
    let output = tasgrid(
        home.path(),
        &[
            "distance",
            "GOO",
            "545",
            "519",
            "--lat",
            "-41.432563",
            "--lon",
            "145.234567",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    let metres: f64 = text
        .trim()
        .trim_end_matches(" m")
        .parse()
        .expect("distance should be a number");
    assert!((metres - 245_878.676).abs() < 0.1, "distance {}", metres);
}

#[test]
fn test_distance_rejects_text_latitude() {
    let home = TempDir::new().unwrap();
    let output = tasgrid(
        home.path(),
        &["distance", "GOO", "545", "519", "--lat", "south", "--lon", "145"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Cannot parse a latitude"));
}

#[test]
fn test_batch_from_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("refs.csv");
    fs::write(&input, "GOO,545,519\nXYZ,100,100\nCBI,050,100\n").unwrap();

    let output = tasgrid(home.path(), &["batch", input.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("sheet,easting,northing"));
    assert!(lines[1].starts_with("GOO,545,519,554500,5551900,"));
    assert!(lines[2].contains("not found"));
    assert!(lines[3].starts_with("CBI,050,100,605000,5510000,"));
}

#[test]
fn test_batch_from_stdin() {
    let home = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_tasgrid"))
        .args(["batch", "-"])
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"FLI,601,100\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("FLI,601,100,560100,5610000,"));
}

#[test]
fn test_batch_missing_file_fails() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("missing.csv");
    let output = tasgrid(home.path(), &["batch", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read"));
}

#[test]
fn test_sheets_lists_bundled_table() {
    let home = TempDir::new().unwrap();
    let output = tasgrid(home.path(), &["sheets"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("GOO"));
    assert!(text.contains("545000-600000"));
    assert!(text.contains("KIN"));
}

#[test]
fn test_table_override() {
    let home = TempDir::new().unwrap();
    let table = home.path().join("sheets.csv");
    fs::write(&table, "ABC,55,G,500,550,5500,5540\n").unwrap();

    let output = tasgrid(
        home.path(),
        &["--table", table.to_str().unwrap(), "resolve", "ABC", "100", "100"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("510000"));
    assert!(stdout(&output).contains("5510000"));

    let output = tasgrid(
        home.path(),
        &["--table", table.to_str().unwrap(), "resolve", "GOO", "545", "519"],
    );
    assert!(!output.status.success());
}

#[test]
fn test_missing_table_is_fatal() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("missing.csv");
    let output = tasgrid(
        home.path(),
        &["--table", missing.to_str().unwrap(), "sheets"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Sheet table not found"));
}

#[test]
fn test_configured_table() {
    let home = TempDir::new().unwrap();
    let table = home.path().join("sheets.csv");
    fs::write(&table, "ABC,55,G,500,550,5500,5540\n").unwrap();

    let config_dir = home.path().join(".tasgrid");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.ini"),
        format!("[sheets]\ntable = {}\n", table.display()),
    )
    .unwrap();

    let output = tasgrid(home.path(), &["sheets"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("ABC"));
    assert!(!text.contains("GOO"));
}

#[test]
fn test_config_init_and_show() {
    let home = TempDir::new().unwrap();

    let output = tasgrid(home.path(), &["config", "init"]);
    assert!(output.status.success());
    assert!(home.path().join(".tasgrid").join("config.ini").exists());

    let output = tasgrid(home.path(), &["config", "init"]);
    assert!(stdout(&output).contains("already exists"));

    let output = tasgrid(home.path(), &["config", "show"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("bundled TASMAP table"));
    assert!(stdout(&output).contains("file = tasgrid.log"));
}

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    let output = tasgrid(home.path(), &["config", "path"]);

    assert!(output.status.success());
    assert!(stdout(&output).trim().ends_with("config.ini"));
}

#[test]
fn test_config_path_with_broken_config() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".tasgrid");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.ini"), "[logging]\nfile = logs/tasgrid.log\n").unwrap();

    // Config commands run before the config is loaded
    let output = tasgrid(home.path(), &["config", "path"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = tasgrid(home.path(), &["sheets"]);
    assert!(!output.status.success());
}
