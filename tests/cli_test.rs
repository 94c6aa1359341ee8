//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn gpupick() -> Command {
    let mut cmd = Command::cargo_bin("gpupick").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn tools_lists_the_builtin_directory() {
    gpupick()
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tools Directory"))
        .stdout(predicate::str::contains("HWINFO"))
        .stdout(predicate::str::contains("GPU-Z"));
}

#[test]
fn tool_shows_per_category_coverage() {
    gpupick()
        .args(["tool", "HWINFO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interconnect Diagnostics"))
        .stdout(predicate::str::contains("4/5 checks"));
}

#[test]
fn unknown_tool_exits_with_code_two() {
    gpupick()
        .args(["tool", "NoSuchTool"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Unknown tool"));
}

#[test]
fn compare_renders_a_matrix_for_each_category() {
    gpupick()
        .args(["compare", "HWINFO", "GPU-Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing: HWINFO vs GPU-Z"))
        .stdout(predicate::str::contains("Memory Diagnostics"));
}

#[test]
fn compare_rejects_a_fourth_tool() {
    gpupick()
        .args(["compare", "a", "b", "c", "d"])
        .assert()
        .failure();
}

#[test]
fn missing_catalog_file_fails_with_its_path() {
    gpupick()
        .args(["tools", "--catalog", "/nonexistent/catalog.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Catalog not found"));
}

#[test]
fn custom_catalog_file_drives_all_commands() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"categories": [{"name": "Only", "checks": [
            {"name": "C1", "description": "d", "tools": ["SoloTool"]}
        ]}]}"#,
    )
    .unwrap();

    gpupick()
        .args(["tools", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("SoloTool"))
        .stdout(predicate::str::contains("1 tools referenced across 1 categories"));

    gpupick()
        .args(["tool", "SoloTool", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 checks"));
}

#[test]
fn malformed_catalog_reports_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    gpupick()
        .args(["tools", "--catalog"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to parse catalog"));
}

#[test]
fn completions_emit_a_bash_script() {
    gpupick()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gpupick"));
}
