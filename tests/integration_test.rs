// tests/integration_test.rs
use std::fs;
use std::process::Command;

use docs_release::config::{load_config, DocsConfig};
use docs_release::ResolvedDocs;
use std::path::Path;
use tempfile::TempDir;

const DOCS_DIR: &str = "tests/fixtures/docs";
const CONFIG: &str = "tests/fixtures/config_with_release.toml";
const MINIMAL_CONFIG: &str = "tests/fixtures/minimal.toml";

fn docs_release() -> Command {
    Command::new(env!("CARGO_BIN_EXE_docs-release"))
}

#[test]
fn test_docs_release_help() {
    let output = docs_release()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("docs-release"));
    assert!(stdout.contains("Resolve release, version and theme"));
}

#[test]
fn test_docs_release_print_release_and_version() {
    let output = docs_release()
        .args(["--config", CONFIG, "--docs-dir", DOCS_DIR, "--release"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.0.3\n");

    let output = docs_release()
        .args(["--config", CONFIG, "--docs-dir", DOCS_DIR, "--short-version"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.0\n");
}

#[test]
fn test_docs_release_descriptor_override() {
    let output = docs_release()
        .args([
            "--config",
            CONFIG,
            "--descriptor",
            "tests/fixtures/Build.scala",
            "--key",
            "scalaVersion",
            "--short-version",
        ])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2.9\n");
}

#[test]
fn test_docs_release_missing_descriptor_fails() {
    let output = docs_release()
        .args([
            "--config",
            CONFIG,
            "--descriptor",
            "tests/fixtures/NoSuchBuild.scala",
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("NoSuchBuild.scala"), "got: {}", stderr);
}

#[test]
fn test_docs_release_toml_output() {
    let output = docs_release()
        .args(["--config", CONFIG, "--docs-dir", DOCS_DIR, "--toml"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let table: toml::Table = toml::from_str(&stdout).expect("output should be TOML");
    assert_eq!(table["project"].as_str(), Some("Finagle"));
    assert_eq!(table["version"].as_str(), Some("1.0"));
    assert_eq!(table["theme"]["name"].as_str(), Some("flask"));
}

#[test]
fn test_resolve_with_installed_theme() {
    let config = load_config(Some(Path::new(CONFIG))).unwrap();
    let docs = ResolvedDocs::resolve(&config, Path::new(DOCS_DIR)).unwrap();

    assert_eq!(docs.release, "1.0.3");
    assert_eq!(docs.version, "1.0");
    assert_eq!(docs.theme.name, "flask");
    assert_eq!(docs.theme.pygments_style, "flask_theme_support.FlaskyStyle");
    assert!(docs.warnings.is_empty());
    assert_eq!(
        docs.extlinks.expand("issue", "36").unwrap().url,
        "https://github.com/twitter/finagle/issues/36"
    );
}

#[test]
fn test_resolve_falls_back_without_theme() {
    let mut config = DocsConfig::default();
    config.release.descriptor = "Build.scala".into();

    let docs = ResolvedDocs::resolve(&config, Path::new("tests/fixtures")).unwrap();
    assert_eq!(docs.theme.name, "default");
    assert_eq!(docs.theme.pygments_style, "tango");
    assert!(docs.theme.options.is_empty());
    assert_eq!(docs.warnings.len(), 1);
}

#[test]
fn test_docs_release_strict_rejects_single_segment() {
    let base_args = [
        "--config",
        MINIMAL_CONFIG,
        "--descriptor",
        "tests/fixtures/SingleSegment.scala",
        "--short-version",
    ];

    let output = docs_release()
        .args(base_args)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "7\n");

    let output = docs_release()
        .args(base_args)
        .arg("--strict")
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Release format error"), "got: {}", stderr);
}

#[test]
fn test_docs_release_default_summary() {
    let output = docs_release()
        .args(["--config", CONFIG, "--docs-dir", DOCS_DIR])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for expected in [
        "Documentation build settings:",
        "Finagle",
        "Release:",
        "1.0.3",
        "Version:",
        "flask",
        "issue, ticket",
    ] {
        assert!(
            stdout.contains(expected),
            "Summary should contain '{}', got: {}",
            expected,
            stdout
        );
    }
    assert!(!stdout.contains("(fallback)"), "got: {}", stdout);
}

#[test]
fn test_docs_release_warns_about_missing_theme() {
    let output = docs_release()
        .args(["--config", MINIMAL_CONFIG, "--docs-dir", "tests/fixtures"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("WARNING"), "got: {}", stderr);
    assert!(stderr.contains("git submodule update --init"), "got: {}", stderr);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("default (fallback)"), "got: {}", stdout);
}

#[test]
fn test_docs_release_quiet_suppresses_warnings() {
    let output = docs_release()
        .args(["--config", MINIMAL_CONFIG, "--docs-dir", "tests/fixtures", "-q"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("WARNING"), "got: {}", stderr);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Util"), "got: {}", stdout);
    assert!(!stdout.contains("Read release from"), "got: {}", stdout);
}

#[test]
fn test_docs_release_reads_config_from_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("docs-release.toml"),
        "project = \"Ostrich\"\n\n[release]\ndescriptor = \"Build.scala\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("Build.scala"), "  version := \"4.1.0\",\n").unwrap();

    let output = docs_release()
        .arg("--toml")
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let table: toml::Table = toml::from_str(&stdout).expect("output should be TOML");
    assert_eq!(table["project"].as_str(), Some("Ostrich"));
    assert_eq!(table["release"].as_str(), Some("4.1.0"));
    assert_eq!(table["version"].as_str(), Some("4.1"));
}
