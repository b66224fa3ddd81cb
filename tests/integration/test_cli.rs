//! Binary-level tests: exit codes and user-visible output.

use crate::helpers::TestProject;
use assert_cmd::Command;
use predicates::prelude::*;

fn packager() -> Command {
    Command::cargo_bin("kodegen_bundler_source").expect("binary built")
}

#[test]
fn test_cli_packages_project() {
    let project = TestProject::new();
    project.file("README.md", "readme");
    project.file("src/main.cpp", "main");

    packager()
        .arg("--project-root")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Release package created successfully"))
        .stdout(predicate::str::contains("tinakit-v1.0.0.zip"))
        .stdout(predicate::str::contains("Package size:"));

    assert!(project.archive_path().is_file());
    assert!(project.checksums_path().is_file());
}

#[test]
fn test_cli_quiet_prints_nothing() {
    let project = TestProject::new();
    project.file("README.md", "readme");

    packager()
        .args(["--quiet", "--project-root"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_missing_root_exits_with_path_code() {
    let project = TestProject::new();

    packager()
        .arg("--project-root")
        .arg(project.path().join("does-not-exist"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Path error"));
}

#[test]
fn test_cli_invalid_manifest_exits_with_manifest_code() {
    let project = TestProject::new();
    project.file("README.md", "readme");
    project.file("release.toml", "[package]\nversion = \"not-a-version\"\n");

    packager()
        .arg("--project-root")
        .arg(project.path())
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Manifest error"));

    assert!(!project.path().join("releases").exists());
}

#[test]
fn test_cli_uses_release_toml() {
    let project = TestProject::new();
    project.file("src/main.cpp", "main");
    project.file(
        "release.toml",
        "[package]\nname = \"Gizmo\"\nversion = \"0.3.0\"\n",
    );

    packager()
        .args(["-q", "--project-root"])
        .arg(project.path())
        .assert()
        .success();

    assert!(project.path().join("releases/gizmo-v0.3.0.zip").is_file());
    let checksums =
        std::fs::read_to_string(project.checksums_path()).expect("checksums");
    assert!(checksums.starts_with("Gizmo v0.3.0 Checksums\n"));
}

#[test]
fn test_cli_missing_required_file_exits_with_copy_code() {
    let project = TestProject::new();
    project.file(
        "release.toml",
        "[staging]\nfiles = [{ name = \"LICENSE\", required = true }]\n",
    );

    packager()
        .args(["-q", "--project-root"])
        .arg(project.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("required file `LICENSE`"));
}

#[test]
fn test_cli_rejects_file_shadowed_by_generated_artifact() {
    let project = TestProject::new();
    project.file("VERSION.txt", "USER CONTENT");
    project.file(
        "release.toml",
        "[staging]\nfiles = [{ name = \"VERSION.txt\", required = true }]\n",
    );

    packager()
        .args(["-q", "--project-root"])
        .arg(project.path())
        .assert()
        .code(8)
        .stderr(predicate::str::contains("collides with generated artifact"));

    assert_eq!(
        std::fs::read_to_string(project.path().join("VERSION.txt")).expect("read"),
        "USER CONTENT"
    );
    assert!(!project.path().join("releases").exists());
}

#[test]
fn test_cli_rejects_project_root_as_directory_entry() {
    let project = TestProject::new();
    project.file("src/main.cpp", "main");
    project.file("release.toml", "[staging]\ndirectories = [{ name = \".\" }]\n");

    packager()
        .args(["-q", "--project-root"])
        .arg(project.path())
        .assert()
        .code(8)
        .stderr(predicate::str::contains("names the project root"));

    assert!(!project.path().join("releases").exists());
}
