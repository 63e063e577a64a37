// ABOUTME: Integration tests for the pagegist CLI binary.
// ABOUTME: Tests explicit selectors, registry lookup, selection, context, JSON output, and failures.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Test Page</title></head>
<body>
<h1>Release notes</h1>
<article><p>Hi   there</p><img src="/shot.png"></article>
<ul><li class="c">First</li><li class="c">Second</li></ul>
</body>
</html>"#;

fn pagegist_cmd() -> Command {
    Command::cargo_bin("pagegist").unwrap()
}

fn write_page(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("page.html");
    fs::write(&path, PAGE_HTML).unwrap();
    path
}

#[test]
fn explicit_selectors_print_content() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);

    pagegist_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("-s")
        .arg("article")
        .arg("-a")
        .arg("li.c")
        .assert()
        .success()
        .stdout("Hi there\nFirst\nSecond\n\n");
}

#[test]
fn builtin_fallback_used_without_selectors() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);

    pagegist_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://unknown.example.org/post")
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Release notes"))
        .stdout(predicate::str::contains("Hi there"));
}

#[test]
fn selection_and_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);

    let output = pagegist_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("-s")
        .arg("article")
        .arg("--selection")
        .arg("  chosen  ")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["content"], "chosen");
    assert_eq!(value["highlighted"], true);
    assert_eq!(value["image_urls"], serde_json::json!([]));
}

#[test]
fn context_and_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);
    let config_path = temp_dir.path().join("sites.json");
    fs::write(
        &config_path,
        r#"[{"domain": "docs.test", "selectors": [{"selector": "h1", "template": "Heading: {{content}}"}],
             "selectorsAll": [{"selector": "article img"}]}]"#,
    )
    .unwrap();
    let output_path = temp_dir.path().join("out.json");

    pagegist_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://www.docs.test/page")
        .arg("--config")
        .arg(&config_path)
        .arg("--context")
        .arg("summarize")
        .arg("--json")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let written = fs::read_to_string(&output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        value["content"],
        "Heading: Release notes\n\n\n\nAdditional Context: summarize"
    );
    assert_eq!(value["image_urls"], serde_json::json!(["/shot.png"]));
}

#[test]
fn unknown_site_without_fallback_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);
    let config_path = temp_dir.path().join("sites.json");
    fs::write(&config_path, r#"[{"domain": "docs.test"}]"#).unwrap();

    pagegist_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://elsewhere.test/")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no selectors configured for https://elsewhere.test/",
        ));
}

#[test]
fn invalid_selector_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);

    pagegist_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("-s")
        .arg("div[")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid selector"));
}

#[test]
fn missing_html_file_fails() {
    pagegist_cmd()
        .arg("--html")
        .arg("/nonexistent/page.html")
        .arg("-s")
        .arg("p")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading file"));
}

#[test]
fn timing_flag_prints_elapsed() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);

    pagegist_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("-s")
        .arg("h1")
        .arg("--timing")
        .assert()
        .success()
        .stderr(predicate::str::contains("elapsed:"))
        .stderr(predicate::str::contains("ms"));
}
