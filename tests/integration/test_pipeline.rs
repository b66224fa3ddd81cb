//! End-to-end pipeline tests against temporary project trees.

use crate::helpers::{TestProject, md5_hex, sha256_hex, tree_files, zip_names};
use kodegen_bundler_source::{
    ReleaseError,
    error::{EXIT_COPY, EXIT_HOOK},
    packager::{AllowListEntry, HookCommand, ReleaseManifestBuilder},
};

const GENERATED: [&str; 4] = ["INSTALL.md", "VERSION.txt", "build_unix.sh", "build_windows.bat"];

#[tokio::test]
async fn test_minimal_project_scenario() {
    let project = TestProject::new();
    project.file("README.md", "# TinaKit\n");
    project.file("src/foo.cpp", "int foo() { return 1; }\n");

    let outcome = project.package().await.expect("package");

    let mut expected = vec!["README.md".to_string(), "src/foo.cpp".to_string()];
    expected.extend(GENERATED.iter().map(|s| s.to_string()));
    expected.sort();
    assert_eq!(tree_files(&project.staging_dir()), expected);

    let archived = zip_names(&project.archive_path());
    let prefixed: Vec<String> = expected
        .iter()
        .map(|f| format!("tinakit-v1.0.0/{f}"))
        .collect();
    assert_eq!(archived, prefixed);
    assert_eq!(outcome.archive.entries.len(), 6);

    let checksums = std::fs::read_to_string(project.checksums_path()).expect("checksums");
    let lines: Vec<&str> = checksums.lines().collect();
    assert_eq!(lines[0], "TinaKit v1.0.0 Checksums");
    assert_eq!(lines[1], "========================");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "File: tinakit-v1.0.0.zip");

    let sha = lines[4].strip_prefix("SHA256: ").expect("sha line");
    let md5 = lines[5].strip_prefix("MD5:    ").expect("md5 line");
    assert_eq!(sha.len(), 64);
    assert_eq!(md5.len(), 32);
    assert_eq!(sha, sha256_hex(&project.archive_path()));
    assert_eq!(md5, md5_hex(&project.archive_path()));
    assert_eq!(outcome.checksums[0].hex_digest, sha);
    assert_eq!(outcome.checksums[1].hex_digest, md5);
}

#[tokio::test]
async fn test_excluded_components_are_not_staged() {
    let project = TestProject::new();
    project.file("src/core.cpp", "core");
    project.file("src/core.obj", "obj");
    project.file("src/build/generated.cpp", "gen");
    project.file("src/.git/HEAD", "ref");
    project.file("tests/__pycache__/t.pyc", "pyc");
    project.file("tests/test_core.cpp", "test");
    project.file("docs/cmake-build-debug/out.txt", "out");
    project.file("docs/guide.md", "guide");
    project.file("third_party/lib/x.dll", "dll");
    project.file("third_party/lib/x.h", "hdr");
    project.file(".gitignore", "build/\n");

    project.package().await.expect("package");

    let staged = tree_files(&project.staging_dir());
    for kept in [
        ".gitignore",
        "docs/guide.md",
        "src/core.cpp",
        "tests/test_core.cpp",
        "third_party/lib/x.h",
    ] {
        assert!(staged.contains(&kept.to_string()), "{kept} missing: {staged:?}");
    }
    for dropped in [
        "src/core.obj",
        "src/build/generated.cpp",
        "src/.git/HEAD",
        "tests/__pycache__/t.pyc",
        "docs/cmake-build-debug/out.txt",
        "third_party/lib/x.dll",
    ] {
        assert!(!staged.contains(&dropped.to_string()), "{dropped} staged");
    }
    assert_eq!(staged.len(), 5 + GENERATED.len());
}

#[tokio::test]
async fn test_archive_is_bijective_with_staging_tree() {
    let project = TestProject::new();
    project.file("include/tinakit/tinakit.hpp", "#pragma once");
    project.file("src/a/b/c.cpp", "c");
    project.file("examples/hello.cpp", "hello");
    project.file("CMakeLists.txt", "project(TinaKit)");
    project.file("LICENSE", "MIT");

    project.package().await.expect("package");

    let staged: Vec<String> = tree_files(&project.staging_dir())
        .into_iter()
        .map(|f| format!("tinakit-v1.0.0/{f}"))
        .collect();
    assert_eq!(zip_names(&project.archive_path()), staged);
}

#[tokio::test]
async fn test_rerun_discards_previous_staging_tree() {
    let project = TestProject::new();
    project.file("README.md", "readme");
    project.file("src/main.cpp", "main");

    project.package().await.expect("first run");
    let first_tree = tree_files(&project.staging_dir());
    let first_archive = std::fs::read(project.archive_path()).expect("archive");

    std::fs::write(project.staging_dir().join("stale.txt"), "stale").expect("stale");

    project.package().await.expect("second run");
    assert_eq!(tree_files(&project.staging_dir()), first_tree);
    assert_eq!(
        std::fs::read(project.archive_path()).expect("archive"),
        first_archive,
        "identical inputs must give a byte-identical archive"
    );
}

#[tokio::test]
async fn test_absent_optional_directory_is_omitted() {
    let project = TestProject::new();
    project.file("src/main.cpp", "main");

    let outcome = project.package().await.expect("package");
    assert!(outcome.staging.skipped.contains(&"third_party".to_string()));
    assert!(
        zip_names(&project.archive_path())
            .iter()
            .all(|n| !n.starts_with("tinakit-v1.0.0/third_party/"))
    );
}

#[tokio::test]
async fn test_missing_required_entry_is_copy_error() {
    let project = TestProject::new();
    project.file("README.md", "readme");

    let manifest = ReleaseManifestBuilder::new()
        .files(vec![
            AllowListEntry::required("README.md"),
            AllowListEntry::required("LICENSE"),
        ])
        .build()
        .expect("manifest");
    let err = project.package_with(manifest).await.expect_err("must fail");

    assert!(matches!(err, ReleaseError::Copy(_)), "{err:?}");
    assert_eq!(err.exit_code(), EXIT_COPY);
    assert!(!project.archive_path().exists());
    assert!(!project.checksums_path().exists());
}

#[tokio::test]
async fn test_generated_artifacts_use_manifest_values() {
    let project = TestProject::new();
    let manifest = ReleaseManifestBuilder::new()
        .product_name("Widget")
        .version("2.0.1")
        .expect("version")
        .release_date("2026-03-01")
        .expect("date")
        .build()
        .expect("manifest");

    let outcome = project.package_with(manifest).await.expect("package");
    let staging = &outcome.paths.staging_dir;
    assert!(staging.ends_with("releases/widget-v2.0.1"));

    let version = std::fs::read_to_string(staging.join("VERSION.txt")).expect("version");
    assert!(version.starts_with("Widget Version 2.0.1\nRelease Date: 2026-03-01\n"));
    let unix = std::fs::read_to_string(staging.join("build_unix.sh")).expect("script");
    assert!(unix.contains("-DWIDGET_BUILD_TESTS=ON -DWIDGET_BUILD_EXAMPLES=ON"));

    let checksums = std::fs::read_to_string(&outcome.paths.checksums_path).expect("checksums");
    assert!(checksums.contains("File: widget-v2.0.1.zip"));
}

#[tokio::test]
async fn test_failing_hook_aborts_before_staging() {
    let project = TestProject::new();
    project.file("src/main.cpp", "main");

    let manifest = ReleaseManifestBuilder::new()
        .hook(HookCommand::new("no-such-release-tool-0b1d", ["--check"]))
        .build()
        .expect("manifest");
    let err = project.package_with(manifest).await.expect_err("must fail");

    assert!(matches!(err, ReleaseError::Hook(_)), "{err:?}");
    assert_eq!(err.exit_code(), EXIT_HOOK);
    assert!(!project.staging_dir().exists());
}

#[cfg(unix)]
#[tokio::test]
async fn test_unix_script_is_executable_and_windows_script_is_not() {
    use std::os::unix::fs::PermissionsExt;

    let project = TestProject::new();
    project.file("README.md", "readme");
    project.package().await.expect("package");

    let mode = |name: &str| {
        std::fs::metadata(project.staging_dir().join(name))
            .expect("metadata")
            .permissions()
            .mode()
    };
    assert_ne!(mode("build_unix.sh") & 0o111, 0);
    assert_eq!(mode("build_windows.bat") & 0o111, 0);

    let mut archive =
        zip::ZipArchive::new(std::fs::File::open(project.archive_path()).expect("open"))
            .expect("zip");
    let unix_mode = archive
        .by_name("tinakit-v1.0.0/build_unix.sh")
        .expect("entry")
        .unix_mode()
        .expect("mode");
    assert_ne!(unix_mode & 0o111, 0);
    let bat_mode = archive
        .by_name("tinakit-v1.0.0/build_windows.bat")
        .expect("entry")
        .unix_mode()
        .expect("mode");
    assert_eq!(bat_mode & 0o111, 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlink_cycle_is_copy_error() {
    let project = TestProject::new();
    project.file("src/main.cpp", "main");
    std::os::unix::fs::symlink(project.path().join("src"), project.path().join("src/loop"))
        .expect("symlink");

    let err = project.package().await.expect_err("must fail");
    assert!(matches!(err, ReleaseError::Copy(_)), "{err:?}");
}

#[cfg(unix)]
#[tokio::test]
async fn test_non_utf8_file_name_is_copy_error() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};
    let project = TestProject::new();
    project.file("src/main.cpp", "main");
    let odd = project.path().join("src").join(OsStr::from_bytes(b"caf\xe9.cpp"));
    if std::fs::write(odd, "x").is_err() {
        return;
    }

    let err = project.package().await.expect_err("must fail");
    assert!(matches!(err, ReleaseError::Copy(_)), "{err:?}");
    assert_eq!(err.exit_code(), EXIT_COPY);
    assert!(!project.archive_path().exists());
}
