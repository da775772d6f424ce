//! Integration tests for the `wcb` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn wcb(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wcb").unwrap();
    cmd.current_dir(dir)
        .env_remove("ROLLUP_WATCH")
        .env_remove("WCB_INPUT")
        .env_remove("WCB_OUTPUT_DIR")
        .env_remove("WCB_PLUGINS__WORKBOX")
        .env("NO_COLOR", "1");
    cmd
}

fn config_json(dir: &Path, args: &[&str]) -> Value {
    let output = wcb(dir).arg("config").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn plugin_names(config: &Value) -> Vec<String> {
    config["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_config_production_html_entry() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("wcb.toml"), "input = \"index.html\"\n").unwrap();

    let config = config_json(dir.path(), &["--mode", "production"]);

    assert_eq!(config["input"], "index.html");
    assert_eq!(config["treeshake"], true);
    assert_eq!(config["output"]["dir"], "dist");
    assert_eq!(config["output"]["format"], "esm");
    assert_eq!(
        plugin_names(&config),
        vec!["index-html", "node-resolve", "babel", "terser", "workbox"]
    );
}

#[test]
fn test_config_watch_from_env() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("wcb.toml"), "input = \"index.html\"\n").unwrap();

    let output = wcb(dir.path())
        .env("ROLLUP_WATCH", "true")
        .arg("config")
        .output()
        .unwrap();
    assert!(output.status.success());

    let config: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["treeshake"], false);
    assert_eq!(
        plugin_names(&config),
        vec!["index-html", "node-resolve", "babel"]
    );
}

#[test]
fn test_config_flags_without_options_file() {
    let dir = TempDir::new().unwrap();

    let config = config_json(
        dir.path(),
        &[
            "--input",
            "src/app.js",
            "--output-dir",
            "build",
            "--babel",
            "false",
            "--workbox",
            "false",
            "--mode",
            "production",
        ],
    );

    assert_eq!(config["output"]["dir"], "build");
    assert_eq!(plugin_names(&config), vec!["node-resolve", "terser"]);
}

#[test]
fn test_config_reads_package_json_field() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
  "name": "demo",
  "browserslist": ["last 1 chrome version"],
  "wcb": { "input": "index.html", "outputDir": "public" }
}"#,
    )
    .unwrap();

    let config = config_json(dir.path(), &["--mode", "production"]);

    assert_eq!(config["output"]["dir"], "public");
    let babel = config["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "babel")
        .unwrap();
    let preset = &babel["options"]["presets"][0];
    assert_eq!(preset[0], "@babel/preset-env");
    assert_eq!(preset[1]["targets"], serde_json::json!(["last 1 chrome version"]));
}

#[test]
fn test_config_compact_output() {
    let dir = TempDir::new().unwrap();

    wcb(dir.path())
        .args(["config", "--input", "app.js", "--compact", "--mode", "watch"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"input\":\"app.js\""))
        .stdout(predicate::str::contains("\n  ").not());
}

#[test]
fn test_config_writes_out_file() {
    let dir = TempDir::new().unwrap();

    wcb(dir.path())
        .args([
            "config",
            "--input",
            "index.html",
            "--mode",
            "watch",
            "--out",
            "out/rollup.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Config written to"));

    let written = fs::read_to_string(dir.path().join("out/rollup.json")).unwrap();
    let config: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(config["input"], "index.html");
}

#[test]
fn test_config_without_options_reports_not_found() {
    let dir = TempDir::new().unwrap();

    wcb(dir.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No build options found"))
        .stderr(predicate::str::contains("wcb.toml"));
}

#[test]
fn test_config_file_without_input_reports_field() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("wcb.toml"), "output_dir = \"build\"\n").unwrap();

    wcb(dir.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input"))
        .stderr(predicate::str::contains("No build options found").not());
}

#[test]
fn test_config_out_directory_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();

    wcb(dir.path())
        .args(["config", "--input", "app.js", "--mode", "watch", "--out", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument: --out is a directory"));
}

#[test]
fn test_config_rejects_bad_workbox_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("workbox-config.json"), "[1, 2]").unwrap();

    wcb(dir.path())
        .args(["config", "--input", "index.html", "--mode", "production"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("workbox"));
}

#[test]
fn test_cwd_flag() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("site");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("wcb.toml"), "input = \"index.html\"\noutput_dir = \"www\"\n").unwrap();

    let config = config_json(dir.path(), &["--cwd", "site", "--mode", "watch"]);
    assert_eq!(config["output"]["dir"], "www");
}

#[test]
fn test_check_reports_plugins() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
    fs::write(dir.path().join("wcb.toml"), "input = \"index.html\"\n").unwrap();

    wcb(dir.path())
        .args(["check", "--mode", "production"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("workbox"))
        .stderr(predicate::str::contains("Configuration is valid!"));
}

#[test]
fn test_check_warns_about_missing_entry() {
    let dir = TempDir::new().unwrap();

    wcb(dir.path())
        .args(["check", "--input", "missing.js", "--mode", "watch"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Entry point not found: missing.js"));
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();

    wcb(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("check"));
}
