//! CLI integration tests: run the built binary against the fixture content.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn folio_gen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio-gen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run folio-gen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn build(source: &Path, out: &Path, extra: &[&str]) -> Output {
    let mut args = vec![
        "build",
        "--source",
        source.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ];
    args.extend_from_slice(extra);
    folio_gen(&args)
}

/// A content directory whose `portfolio.json` is `document`.
fn content_with(document: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("portfolio.json"), document).unwrap();
    tmp
}

// =========================================================================
// build
// =========================================================================

#[test]
fn build_renders_fixture_portfolio() {
    let out = TempDir::new().unwrap();
    let result = build(&fixtures_dir(), out.path(), &[]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("Dana Reyes"));
    assert!(html.contains(r#"id="projects""#));
    assert!(out.path().join("assets/favicon.webp").exists());
    assert!(out.path().join(".folio-cache.json").exists());

    let text = stdout(&result);
    assert!(text.contains("Home \u{2192} index.html"));
    assert!(text.contains("Generated portfolio for Dana Reyes (4 projects, 2 roles)"));
}

#[test]
fn rebuild_reports_unchanged_outputs() {
    let out = TempDir::new().unwrap();
    build(&fixtures_dir(), out.path(), &[]);
    let again = build(&fixtures_dir(), out.path(), &[]);
    assert!(stdout(&again).contains("Cache: 8 unchanged, 0 written (8 total)"));

    let forced = build(&fixtures_dir(), out.path(), &["--no-cache"]);
    assert!(stdout(&forced).contains("Cache: 8 written"));
}

#[test]
fn build_with_broken_document_writes_error_page_and_fails() {
    let content = content_with("{ \"personal\": ");
    let out = TempDir::new().unwrap();
    let result = build(content.path(), out.path(), &[]);

    assert!(!result.status.success());
    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("Failed to load portfolio data"));
    assert!(!html.contains(r#"id="hero""#));
}

#[test]
fn build_with_missing_document_fails() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let result = build(content.path(), out.path(), &[]);
    assert!(!result.status.success());
    assert!(stdout(&result).contains("Error page \u{2192} index.html"));
}

#[test]
fn bundled_document_builds_without_content_dir() {
    let out = TempDir::new().unwrap();
    let missing = out.path().join("no-such-content");
    let result = build(&missing, &out.path().join("dist"), &["--bundled"]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));
    assert!(out.path().join("dist/index.html").exists());
}

#[test]
fn config_overrides_apply() {
    let content = content_with(&std::fs::read_to_string(fixtures_dir().join("portfolio.json")).unwrap());
    std::fs::write(
        content.path().join("config.toml"),
        "[projects]\ndefault_filter = \"featured\"\n\n[site]\nlang = \"pt\"\n",
    )
    .unwrap();
    let out = TempDir::new().unwrap();
    let result = build(content.path(), out.path(), &[]);
    assert!(result.status.success());

    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains(r#"<html lang="pt">"#));
    assert!(html.contains(r#"id="filter-featured" value="featured" checked"#));
}

#[test]
fn unknown_config_key_is_rejected() {
    let content = content_with("{}");
    std::fs::write(content.path().join("config.toml"), "[reveal]\nspeed = 3\n").unwrap();
    let out = TempDir::new().unwrap();
    let result = build(content.path(), out.path(), &[]);
    assert!(!result.status.success());
    assert!(!out.path().join("index.html").exists());
}

// =========================================================================
// check / gen-*
// =========================================================================

#[test]
fn check_prints_inventory() {
    let result = folio_gen(&["check", "--source", fixtures_dir().to_str().unwrap()]);
    assert!(result.status.success());
    let text = stdout(&result);
    assert!(text.contains("Dana Reyes, Systems Engineer"));
    assert!(text.contains("001 Folio [Completed, Featured]"));
    assert!(text.contains("==> Content is valid"));
    assert!(!text.contains("Warnings"));
}

#[test]
fn check_reports_data_quality_warnings() {
    let raw = std::fs::read_to_string(fixtures_dir().join("portfolio.json")).unwrap();
    let content = content_with(&raw.replace("\"level\": 75", "\"level\": 140"));
    let result = folio_gen(&["check", "--source", content.path().to_str().unwrap()]);
    assert!(result.status.success());
    let text = stdout(&result);
    assert!(text.contains("Warnings"));
    assert!(text.contains("PostgreSQL"));
}

#[test]
fn check_fails_on_bad_status() {
    let raw = std::fs::read_to_string(fixtures_dir().join("portfolio.json")).unwrap();
    let content = content_with(&raw.replace("\"Planned\"", "\"Someday\""));
    let result = folio_gen(&["check", "--source", content.path().to_str().unwrap()]);
    assert!(!result.status.success());
}

#[test]
fn gen_content_is_a_valid_document() {
    let result = folio_gen(&["gen-content"]);
    assert!(result.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert!(doc["personal"]["name"].is_string());
    assert!(doc["projects"].as_array().is_some_and(|p| !p.is_empty()));
}

#[test]
fn gen_config_prints_documented_defaults() {
    let result = folio_gen(&["gen-config"]);
    assert!(result.status.success());
    let text = stdout(&result);
    assert!(text.contains("[reveal]"));
    assert!(text.contains("threshold = 0.3"));
    let _: toml::Value = toml::from_str(&text).unwrap();
}
