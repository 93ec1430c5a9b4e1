#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ARTICLE: &str = "# The seo handbook
seo basics for new writers. Search engine optimisation helps pages rank. Good keyword work starts with research. Writers should plan each section carefully. Short sentences keep readers engaged.

## Planning

Every page needs a clear purpose and audience. Outlines keep drafts focused.

- outline first
- draft second

### Details

Review each draft for clarity and structure before it ships. Measure how seo changes affect traffic over several weeks. Subscribe for weekly tips on writing and more.
";

/// Runs the binary inside `dir` with HOME pointed there, so no user config leaks in.
fn seoscore_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("seoscore").expect("binary should compile");
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

#[test]
fn analyze_prints_markdown_report() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("article.md"), ARTICLE).expect("article should write");

    seoscore_in(&dir)
        .args(["analyze", "article.md", "-k", "seo", "--min-words", "50"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("## Overall SEO Score:"))
        .stdout(predicate::str::contains("| seo |"))
        .stdout(predicate::str::contains("## Top Recommendations"));
}

#[test]
fn analyze_reads_content_from_stdin_as_json() {
    let dir = TempDir::new().expect("temp dir should be created");

    seoscore_in(&dir)
        .args(["analyze", "-", "-k", "seo", "--format", "json"])
        .write_stdin("### Sub\n\nseo notes")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"h3_count\": 1"))
        .stdout(predicate::str::contains("Fix heading hierarchy"));
}

#[test]
fn analyze_without_keywords_is_an_input_error() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("article.md"), ARTICLE).expect("article should write");

    seoscore_in(&dir)
        .args(["analyze", "article.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No target keywords provided"));
}

#[test]
fn analyze_empty_file_is_an_input_error() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("empty.md"), "").expect("empty file should write");

    seoscore_in(&dir)
        .args(["analyze", "empty.md", "-k", "seo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No content provided"));
}

#[test]
fn analyze_missing_file_reports_path() {
    let dir = TempDir::new().expect("temp dir should be created");

    seoscore_in(&dir)
        .args(["analyze", "nope.md", "-k", "seo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn analyze_uses_keywords_and_format_from_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("article.md"), ARTICLE).expect("article should write");
    fs::write(
        dir.path().join("seoscore.toml"),
        r#"
[scoring]
keywords = ["seo", "traffic"]
min_word_count = 50

[report]
format = "json"
"#,
    )
    .expect("config should write");

    seoscore_in(&dir)
        .args(["analyze", "article.md"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"keyword\": \"traffic\""))
        .stdout(predicate::str::contains("\"min_word_count\": 50"));
}

#[test]
fn analyze_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("article.md"), ARTICLE).expect("article should write");
    fs::write(
        dir.path().join("seoscore.toml"),
        r#"
[thresholds]
moderate_sentence_words = 40.0
"#,
    )
    .expect("config should write");

    seoscore_in(&dir)
        .args(["analyze", "article.md", "-k", "seo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn analyze_fail_under_returns_threshold_code() {
    let dir = TempDir::new().expect("temp dir should be created");

    seoscore_in(&dir)
        .args(["analyze", "-", "-k", "seo", "--fail-under", "90"])
        .write_stdin("short text without structure")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("below --fail-under 90"));
}

#[test]
fn analyze_output_writes_report_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("article.md"), ARTICLE).expect("article should write");

    seoscore_in(&dir)
        .args([
            "analyze",
            "article.md",
            "-k",
            "seo",
            "--output",
            "reports/article-report.md",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("report written to"));

    let written = fs::read_to_string(dir.path().join("reports/article-report.md"))
        .expect("report file should exist");
    assert!(written.contains("# Content Analysis Results"));
}

#[test]
fn request_renders_tool_report() {
    let dir = TempDir::new().expect("temp dir should be created");

    seoscore_in(&dir)
        .arg("request")
        .write_stdin(
            r##"{"content": "# Title\n\nSome body text...", "target_keywords": ["seo", "keyword research"], "min_word_count": 300}"##,
        )
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Content Analysis Results"))
        .stdout(predicate::str::contains("No target keywords found in content."));
}

#[test]
fn request_rejects_malformed_json() {
    let dir = TempDir::new().expect("temp dir should be created");

    seoscore_in(&dir)
        .arg("request")
        .write_stdin("{\"content\": ")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid JSON input"));
}

#[test]
fn batch_scores_each_draft_and_warns_on_failures() {
    let dir = TempDir::new().expect("temp dir should be created");
    let drafts = dir.path().join("drafts");
    fs::create_dir_all(&drafts).expect("drafts dir should create");
    fs::write(drafts.join("article.md"), ARTICLE).expect("article should write");
    fs::write(drafts.join("blank.md"), "").expect("blank should write");

    seoscore_in(&dir)
        .args(["batch", "drafts", "-k", "seo"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("| article.md |"))
        .stdout(predicate::str::contains("| blank.md | - | error:"));
}

#[test]
fn batch_without_keywords_fails_once_as_input_error() {
    let dir = TempDir::new().expect("temp dir should be created");
    let drafts = dir.path().join("drafts");
    fs::create_dir_all(&drafts).expect("drafts dir should create");
    fs::write(drafts.join("a.md"), ARTICLE).expect("draft should write");
    fs::write(drafts.join("b.md"), ARTICLE).expect("draft should write");

    seoscore_in(&dir)
        .args(["batch", "drafts"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("| a.md |").not())
        .stderr(predicate::str::contains("No target keywords provided"));
}

#[test]
fn batch_fail_under_flags_low_scores() {
    let dir = TempDir::new().expect("temp dir should be created");
    let drafts = dir.path().join("drafts");
    fs::create_dir_all(&drafts).expect("drafts dir should create");
    fs::write(drafts.join("thin.md"), "thin text").expect("draft should write");

    seoscore_in(&dir)
        .args(["batch", "drafts", "-k", "seo", "--fail-under", "80", "--format", "json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"status\": \"scored\""));
}

#[test]
fn batch_missing_directory_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");

    seoscore_in(&dir)
        .args(["batch", "missing", "-k", "seo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
