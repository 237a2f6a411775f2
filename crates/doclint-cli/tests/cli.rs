//! Binary-level behavior: reports, exit codes, and schema persistence.

use std::path::{Path, PathBuf};
use std::process::Command;

use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fixtures(dir: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../doclint-parser/tests/fixtures")
        .join(dir)
}

/// A `doclint` invocation isolated from the caller's config and environment.
fn doclint(cwd: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_doclint")));
    cmd.current_dir(cwd.path())
        .env("XDG_CONFIG_HOME", cwd.path().join("xdg"))
        .env("HOME", cwd.path())
        .env_remove("npm_package_version")
        .env_remove("DOCLINT_LOG")
        .env_remove("DOCLINT_LINT__VERSION")
        .env_remove("DOCLINT_LINT__WEBSITE_BASE_URL")
        .env_remove("DOCLINT_LINT__REPO_BASE_URL");
    cmd
}

fn read_records(path: &Path) -> Vec<serde_json::Value> {
    let text = std::fs::read_to_string(path).expect("outfile written");
    serde_json::from_str(&text).expect("outfile is a JSON array")
}

#[test]
fn valid_docs_are_good_to_go() {
    let cwd = tempfile::tempdir().expect("tempdir");
    doclint(&cwd)
        .arg(fixtures("api"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Docs are good to go!"))
        .stdout(predicate::str::contains("--version=1.2.3 --outfile=electron.json"))
        .stderr(predicate::str::contains("✓ BrowserWindow"))
        .stderr(predicate::str::contains("✓ webviewTag"));
}

#[test]
fn broken_docs_exit_one_and_skip_the_outfile() {
    let cwd = tempfile::tempdir().expect("tempdir");
    doclint(&cwd)
        .arg(fixtures("broken"))
        .args(["--version", "1.4.1", "--outfile", "electron.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✘ clipboard"))
        .stderr(predicate::str::contains(
            "  - unable to parse methods heading 'clipboard.clear'",
        ));
    assert!(!cwd.path().join("electron.json").exists());
}

#[test]
fn outfile_receives_every_record() {
    let cwd = tempfile::tempdir().expect("tempdir");
    doclint(&cwd)
        .arg(fixtures("api"))
        .arg("--version=1.4.1")
        .arg("--outfile=electron.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created electron.json"));

    let records = read_records(&cwd.path().join("electron.json"));
    assert_eq!(records.len(), 12);
    assert!(records.iter().all(|r| r["version"] == "1.4.1"));
    assert_eq!(records[1]["name"], "BrowserWindow");
    assert_eq!(records[1]["slug"], "browser-window");
}

#[test]
fn outfile_requires_a_version() {
    let cwd = tempfile::tempdir().expect("tempdir");
    doclint(&cwd)
        .arg(fixtures("api"))
        .args(["--outfile", "electron.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "`version` is required if `outfile` is specified",
        ));
}

#[test]
fn npm_package_version_is_the_last_fallback() {
    let cwd = tempfile::tempdir().expect("tempdir");
    doclint(&cwd)
        .env("npm_package_version", "2.0.0")
        .arg(fixtures("api"))
        .args(["--outfile", "electron.json"])
        .assert()
        .success();

    let records = read_records(&cwd.path().join("electron.json"));
    assert!(records.iter().all(|r| r["version"] == "2.0.0"));
}

#[test]
fn config_file_supplies_version_and_urls() {
    let cwd = tempfile::tempdir().expect("tempdir");
    let config = cwd.path().join("custom.toml");
    std::fs::write(
        &config,
        "[lint]\nversion = \"3.1.0\"\nwebsite_base_url = \"https://docs.example.com/api\"\n",
    )
    .expect("write config");

    doclint(&cwd)
        .arg(fixtures("api"))
        .arg("--config")
        .arg(&config)
        .args(["--outfile", "electron.json"])
        .assert()
        .success();

    let records = read_records(&cwd.path().join("electron.json"));
    assert_eq!(records[1]["version"], "3.1.0");
    assert_eq!(
        records[1]["websiteUrl"],
        "https://docs.example.com/api/browser-window"
    );
}

#[test]
fn missing_config_file_is_a_hard_failure() {
    let cwd = tempfile::tempdir().expect("tempdir");
    doclint(&cwd)
        .arg(fixtures("api"))
        .args(["--config", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("doclint error:"));
}

#[test]
fn outfile_and_infile_are_incompatible() {
    let cwd = tempfile::tempdir().expect("tempdir");
    doclint(&cwd)
        .arg(fixtures("api"))
        .args(["--outfile", "a.json", "--infile", "b.json"])
        .assert()
        .code(2);
}

#[test]
fn missing_docs_path_is_a_hard_failure() {
    let cwd = tempfile::tempdir().expect("tempdir");
    doclint(&cwd)
        .arg("does/not/exist")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("docs path does not exist"));
}

#[test]
fn missing_infile_is_a_hard_failure() {
    let cwd = tempfile::tempdir().expect("tempdir");
    doclint(&cwd)
        .arg(fixtures("i18n/es"))
        .args(["--infile", "electron.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "`infile` must be an existing path on the filesystem. Got:",
        ));
}

#[test]
fn malformed_infile_is_a_hard_failure() {
    let cwd = tempfile::tempdir().expect("tempdir");
    std::fs::write(cwd.path().join("electron.json"), r#"[{"name": "app"}]"#).expect("write");

    doclint(&cwd)
        .arg(fixtures("i18n/es"))
        .args(["--infile", "electron.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid baseline"));
}

#[test]
fn translations_are_checked_against_the_written_schema() {
    let cwd = tempfile::tempdir().expect("tempdir");
    doclint(&cwd)
        .arg(fixtures("api"))
        .args(["--version", "1.4.1", "--outfile", "electron.json"])
        .assert()
        .success();

    doclint(&cwd)
        .arg(fixtures("i18n/es"))
        .args(["--infile", "electron.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✓ app"))
        .stderr(predicate::str::contains(
            "✘ BrowserWindow\n  - expected 'BrowserWindow' Heading but found 'Ventana'",
        ))
        .stderr(predicate::str::contains("✓ webviewTag"));
}
