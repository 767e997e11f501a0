use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const LEFT: &str = "\
host web1 { hardware ethernet aa:bb:cc:dd:ee:01; fixed-address 10.0.0.1; }
host db1 { hardware ethernet aa:bb:cc:dd:ee:03; fixed-address 10.0.0.3; }
host app1 { hardware ethernet aa:bb:cc:dd:ee:04; fixed-address 10.0.0.4; }
";

const RIGHT: &str = "\
host web1 { hardware ethernet aa:bb:cc:dd:ee:01; fixed-address 10.0.0.1; }
host db1 { hardware ethernet aa:bb:cc:dd:ee:03; fixed-address 10.0.0.30; }
host new1 { hardware ethernet aa:bb:cc:dd:ee:05; fixed-address 10.0.0.5; }
";

fn write_pair(dir: &Path) -> (PathBuf, PathBuf) {
    let left = dir.join("left.conf");
    let right = dir.join("right.conf");
    fs::write(&left, LEFT).expect("left write");
    fs::write(&right, RIGHT).expect("right write");
    (left, right)
}

#[test]
fn compare_reports_all_sections_and_summary() {
    let dir = tempdir().expect("tempdir");
    let (left, right) = write_pair(dir.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dhcpd-sync"));
    cmd.arg("compare")
        .arg(&left)
        .arg(&right)
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing in"))
        .stdout(predicate::str::contains(
            "host new1 { hardware ethernet aa:bb:cc:dd:ee:05; fixed-address 10.0.0.5; }",
        ))
        .stdout(predicate::str::contains(
            "host app1 { hardware ethernet aa:bb:cc:dd:ee:04; fixed-address 10.0.0.4; }",
        ))
        .stdout(predicate::str::contains("MAC AA:BB:CC:DD:EE:03"))
        .stdout(predicate::str::contains("Matching pairs: 1"))
        .stdout(predicate::str::contains("IP mismatches: 1"))
        .stdout(predicate::str::contains("MAC mismatches: 0"));
}

#[test]
fn compare_json_outputs_structured_result() {
    let dir = tempdir().expect("tempdir");
    let (left, right) = write_pair(dir.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dhcpd-sync"));
    cmd.arg("compare")
        .arg(&left)
        .arg(&right)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matching\""))
        .stdout(predicate::str::contains("\"ip_mismatches\""))
        .stdout(predicate::str::contains("\"left_ip\": \"10.0.0.3\""));
}

#[test]
fn compare_summary_prints_counts_only() {
    let dir = tempdir().expect("tempdir");
    let (left, right) = write_pair(dir.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dhcpd-sync"));
    cmd.arg("compare")
        .arg(&left)
        .arg(&right)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching pairs: 1"))
        .stdout(predicate::str::contains("(present in").not());
}

#[test]
fn identical_files_report_no_differences() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("same.conf");
    fs::write(&path, LEFT).expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dhcpd-sync"));
    cmd.arg("compare")
        .arg(&path)
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching pairs: 3"))
        .stdout(predicate::str::contains("IP mismatches: 0"))
        .stdout(predicate::str::contains("MAC mismatches: 0"));
}

#[test]
fn compare_fails_cleanly_on_missing_file() {
    let dir = tempdir().expect("tempdir");
    let (left, _) = write_pair(dir.path());
    let missing = dir.path().join("absent.conf");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dhcpd-sync"));
    cmd.arg("compare")
        .arg(&left)
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
