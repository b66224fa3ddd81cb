//! Shared helpers: throw-away project trees and archive inspection.

use kodegen_bundler_source::{
    ReleaseError,
    packager::{Packager, PathResolver, ReleaseManifest, ReleaseManifestBuilder, ReleaseOutcome, Reporter},
};
use sha2::{Digest, Sha256};
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// A project root in a temporary directory.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp project"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` at `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, content).expect("write file");
        self
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.path().join("releases/tinakit-v1.0.0")
    }

    pub fn archive_path(&self) -> PathBuf {
        self.path().join("releases/tinakit-v1.0.0.zip")
    }

    pub fn checksums_path(&self) -> PathBuf {
        self.path().join("releases/checksums.txt")
    }

    /// Runs the pipeline with the default manifest.
    pub async fn package(&self) -> Result<ReleaseOutcome, ReleaseError> {
        self.package_with(ReleaseManifestBuilder::new().build().expect("default manifest"))
            .await
    }

    pub async fn package_with(&self, manifest: ReleaseManifest) -> Result<ReleaseOutcome, ReleaseError> {
        let resolver = PathResolver::new(self.path()).expect("resolve project root");
        Packager::new(manifest, &resolver, Reporter::quiet()).run().await
    }
}

/// Every regular file below `root`, relative, `/`-separated, sorted.
pub fn tree_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(|e| e.expect("walk"))
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .expect("relative")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}

/// Entry names of a zip archive, sorted.
pub fn zip_names(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(path).expect("open zip")).expect("read zip");
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

pub fn sha256_hex(path: &Path) -> String {
    format!("{:x}", Sha256::digest(std::fs::read(path).expect("read")))
}

pub fn md5_hex(path: &Path) -> String {
    format!("{:x}", md5::compute(std::fs::read(path).expect("read")))
}
