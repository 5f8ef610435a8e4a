use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "4 5\nS.#.G\n#....\n.#..#\n..#..\n";

#[test]
fn sample_from_stdin() {
    let mut cmd = Command::cargo_bin("warehouse_nav").unwrap();
    cmd.write_stdin(SAMPLE);

    cmd.assert().success().stdout("6\n");
}

#[test]
fn dash_reads_stdin() {
    let mut cmd = Command::cargo_bin("warehouse_nav").unwrap();
    cmd.arg("-").write_stdin("1 3\nS#G\n");

    cmd.assert().success().stdout("-1\n");
}

#[test]
fn sample_from_file() {
    let path = std::env::temp_dir().join(format!("warehouse_nav_{}.txt", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    drop(file);

    let mut cmd = Command::cargo_bin("warehouse_nav").unwrap();
    cmd.arg(&path);
    cmd.assert().success().stdout("6\n");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn rust_log_applies_without_verbose_flag() {
    let mut cmd = Command::cargo_bin("warehouse_nav").unwrap();
    cmd.env("RUST_LOG", "info").write_stdin(SAMPLE);

    cmd.assert()
        .success()
        .stdout("6\n")
        .stderr(predicate::str::contains("Read floor plan with 4 rows"));
}

#[test]
fn quiet_by_default() {
    let mut cmd = Command::cargo_bin("warehouse_nav").unwrap();
    cmd.env_remove("RUST_LOG").write_stdin(SAMPLE);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Read floor plan").not());
}

#[test]
fn truncated_input_fails() {
    let mut cmd = Command::cargo_bin("warehouse_nav").unwrap();
    cmd.write_stdin("3 3\nS..\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Expect 3 rows"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = Command::cargo_bin("warehouse_nav").unwrap();
    cmd.arg("no/such/plan.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open given file"));
}
