//! CLI tests for the termblock binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// termblock command isolated from the user's config file
fn termblock(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("termblock").unwrap();
    cmd.arg("--config")
        .arg(temp.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn render_stdin_to_html() {
    let temp = TempDir::new().unwrap();
    termblock(&temp)
        .args(["render", "--fragment"])
        .write_stdin("\x1b[1mbold\x1b[0m plain")
        .assert()
        .success()
        .stdout("<span style=\"font-weight: bold\">bold</span> plain\n");
}

#[test]
fn render_wraps_by_default() {
    let temp = TempDir::new().unwrap();
    termblock(&temp)
        .arg("render")
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<pre><code class=\"language-terminal is-loaded\">",
        ));
}

#[test]
fn render_file_as_text() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("log.txt");
    fs::write(&input, "\x1b[31merror:\x1b[0m failed").unwrap();

    termblock(&temp)
        .args(["render", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout("error: failed");
}

#[test]
fn render_expands_shorthands() {
    let temp = TempDir::new().unwrap();
    termblock(&temp)
        .args(["render", "--format", "text"])
        .write_stdin(r"\e[1mA\x42é")
        .assert()
        .success()
        .stdout("ABé");
}

#[test]
fn render_no_shorthands_keeps_input() {
    let temp = TempDir::new().unwrap();
    termblock(&temp)
        .args(["render", "--format", "text", "--no-shorthands"])
        .write_stdin(r"\x42")
        .assert()
        .success()
        .stdout(r"\x42");
}

#[test]
fn render_json_output() {
    let temp = TempDir::new().unwrap();
    let output = termblock(&temp)
        .args(["render", "--format", "json"])
        .write_stdin("\x1b[38;2;1;2;3mrgb")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["text"], "rgb");
    assert_eq!(value[0]["color"], "rgb(1,2,3)");
}

#[test]
fn render_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    termblock(&temp)
        .args(["render", "/nonexistent/termblock-input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn config_file_changes_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[output]\nformat = \"text\"\n\n[input]\nnormalize_shorthands = false\n",
    )
    .unwrap();

    termblock(&temp)
        .arg("render")
        .write_stdin(r"\e[1mx")
        .assert()
        .success()
        .stdout(r"\e[1mx");
}

#[test]
fn custom_palette_is_applied() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[theme]\nnormal = [\"#000\", \"#f00\", \"#0f0\", \"#ff0\", \"#00f\", \"#f0f\", \"#0ff\", \"#fff\"]\n",
    )
    .unwrap();

    termblock(&temp)
        .args(["render", "--fragment"])
        .write_stdin("\x1b[31mred")
        .assert()
        .success()
        .stdout("<span style=\"color: #f00\">red</span>\n");
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[theme]\ndim_opacity = -1.0\n").unwrap();

    termblock(&temp)
        .arg("render")
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("dim_opacity"));
}

#[test]
fn config_init_then_show() {
    let temp = TempDir::new().unwrap();
    termblock(&temp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    termblock(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("normalize_shorthands = true"))
        .stdout(predicate::str::contains("[theme]"));
}

#[test]
fn config_path_prints_override() {
    let temp = TempDir::new().unwrap();
    termblock(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_generate_script() {
    let temp = TempDir::new().unwrap();
    termblock(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termblock"));
}
