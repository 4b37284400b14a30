//! End-to-end tests of the `ccat` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ccat() -> Command {
    let mut cmd = cargo_bin_cmd!("ccat");
    cmd.env_remove("CCAT_LOG");
    cmd
}

fn fixture(name: &str, contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn piped_output_is_plain() {
    ccat()
        .write_stdin("func main() {}\n")
        .assert()
        .success()
        .stdout("func main() {}\n");
}

#[test]
fn forced_color_uses_light_palette() {
    ccat()
        .args(["--color", "always"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("\x1b[34mhello\x1b[39;49;00m");
}

#[test]
fn dark_background_palette() {
    ccat()
        .args(["--color", "always", "--bg", "dark"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("\x1b[34;01mhello\x1b[39;49;00m");
}

#[test]
fn color_code_override() {
    ccat()
        .args(["--color", "always", "-G", "String=red"])
        .write_stdin("\"x\"")
        .assert()
        .success()
        .stdout("\x1b[31;01m\"x\"\x1b[39;49;00m");
}

#[test]
fn unknown_color_code_fails() {
    ccat()
        .args(["-G", "Foo=red"])
        .write_stdin("x")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("ccat: unknown color code `Foo`"));
}

#[test]
fn malformed_color_code_is_a_usage_error() {
    ccat()
        .args(["-G", "String"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<name>=<value>"));
}

#[test]
fn html_from_file() {
    let (_dir, path) = fixture("main.go", "if x < 1 {}");
    ccat()
        .arg("--html")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"<span class="darkblue">if</span> <span class="darkblue">x</span> <span class="darkred">&lt;</span>"#,
        ));
}

#[test]
fn json_document() {
    let output = ccat()
        .arg("--json")
        .write_stdin("/* a\nb */ x")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let lines = json["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["entries"][0]["label"], "/* a");
    assert_eq!(lines[1]["entries"][0]["class"], "com");
    assert_eq!(lines[1]["entries"][2]["label"], "x");
}

#[test]
fn files_and_stdin_concatenate() {
    let (_dir, path) = fixture("a.txt", "one\n");
    ccat()
        .arg(&path)
        .arg("-")
        .arg(&path)
        .write_stdin("two\n")
        .assert()
        .success()
        .stdout("one\ntwo\none\n");
}

#[test]
fn missing_file_fails_with_path() {
    ccat()
        .arg("no-such-file.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("ccat: no-such-file.txt: "));
}

#[test]
fn max_size_is_enforced() {
    let (_dir, path) = fixture("big.txt", "hello world");
    ccat()
        .args(["--max-size", "4"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("size is greater than 4 bytes"));
}

#[test]
fn palette_listing() {
    ccat()
        .arg("--palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword=").and(predicate::str::contains("Available colors: ")));
}

#[test]
fn version_flag() {
    ccat()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
