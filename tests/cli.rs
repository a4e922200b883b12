//! Integration tests for the `parselt` command-line interface.
//!
//! Covers stdin and file input, surface and width selection, colour
//! control, ordered multi-file output and error reporting.

use std::fs;

use tempfile::tempdir;

#[macro_use]
mod prelude;
use prelude::*;

fn parselt() -> Command {
    let mut cmd = Command::cargo_bin("parselt").expect("failed to create cargo command for parselt");
    cmd.env_remove("COLUMNS").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version_flag() {
    parselt()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("parselt {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_markdown_from_stdin() {
    parselt()
        .arg("--markdown")
        .write_stdin("## Quick Start\n\nHello **world**\n")
        .assert()
        .success()
        .stdout("## Quick Start\n\nHello **world**\n");
}

#[test]
fn test_cli_terminal_from_markup() {
    parselt()
        .args(["--markup", "--color", "never"])
        .write_stdin("<h2>Quick Start</h2>\n")
        .assert()
        .success()
        .stdout("▶▶ Quick Start\n══════════════\n");
}

#[test]
fn test_cli_color_always_emits_escapes() {
    parselt()
        .args(["--color", "always"])
        .write_stdin("# Title\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

#[rstest]
#[case::flag(&["--width", "24"][..], None)]
#[case::env(&[][..], Some("24"))]
fn test_cli_width_sources(#[case] args: &[&str], #[case] columns: Option<&str>) {
    let mut cmd = parselt();
    cmd.args(args).args(["--color", "never"]);
    if let Some(columns) = columns {
        cmd.env("COLUMNS", columns);
    }
    let output = cmd
        .write_stdin("one two three four five six seven eight nine ten eleven twelve\n")
        .output()
        .expect("failed to run parselt");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().count() > 1, "{stdout:?}");
    assert!(stdout.lines().all(|l| l.chars().count() <= 24), "{stdout:?}");
}

#[test]
fn test_cli_files_print_in_argument_order() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut paths = Vec::new();
    let mut expected = String::new();
    for i in 0..6 {
        let path = dir.path().join(format!("doc{i}.md"));
        fs::write(&path, format!("# Doc {i}\n\n- item {i}\n")).expect("failed to write file");
        expected.push_str(&format!("# Doc {i}\n\n- item {i}\n"));
        paths.push(path);
    }
    parselt()
        .arg("--markdown")
        .args(&paths)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_cli_missing_file_fails_with_context() {
    let dir = tempdir().expect("failed to create temporary directory");
    let missing = dir.path().join("absent.md");
    parselt()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to render"));
}

#[test]
fn test_cli_rejects_unknown_color_choice() {
    parselt().args(["--color", "sometimes"]).assert().failure();
}
