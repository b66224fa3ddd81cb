//! Project root and release path resolution.

use crate::packager::{
    Error, Result,
    error::{Context, ErrorExt},
    settings::ReleaseManifest,
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Directory below the project root that receives all release output.
pub const RELEASES_DIR: &str = "releases";

/// Checksum manifest file name inside [`RELEASES_DIR`].
pub const CHECKSUMS_FILE: &str = "checksums.txt";

/// Levels between the executable's directory and the project root
/// (`<root>/target/<profile>/<exe>`).
pub const DEFAULT_ROOT_DEPTH: usize = 2;

/// Every location a release run reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePaths {
    pub project_root: PathBuf,
    /// `<root>/releases`
    pub releases_dir: PathBuf,
    /// `<root>/releases/<release-name>`
    pub staging_dir: PathBuf,
    /// `<root>/releases/<release-name>.zip`
    pub archive_path: PathBuf,
    /// `<root>/releases/checksums.txt`
    pub checksums_path: PathBuf,
}

/// Locates the project root and derives the release paths from it.
#[derive(Debug, Clone)]
pub struct PathResolver {
    project_root: PathBuf,
}

impl PathResolver {
    /// Uses an explicit project root (relative paths are made absolute).
    ///
    /// # Errors
    ///
    /// Fails if the root does not exist or is not a directory.
    pub fn new(project_root: impl AsRef<Path>) -> Result<Self> {
        let root = project_root
            .as_ref()
            .absolutize()
            .fs_context("resolving project root", project_root.as_ref())?
            .into_owned();

        if !root.is_dir() {
            return Err(Error::GenericError(format!(
                "project root {} does not exist or is not a directory",
                root.display()
            )));
        }
        Ok(Self { project_root: root })
    }

    /// Resolves the root `depth` levels above the running executable's directory.
    pub fn from_executable(depth: usize) -> Result<Self> {
        let exe = std::env::current_exe().fs_context("locating executable", "<current exe>")?;
        let exe_dir = exe
            .parent()
            .context(format!("executable {} has no parent directory", exe.display()))?;
        let root = exe_dir
            .ancestors()
            .nth(depth)
            .context(format!(
                "executable directory {} has fewer than {depth} ancestors",
                exe_dir.display()
            ))?;
        Self::new(root)
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Staging and archive locations for `manifest`'s release.
    pub fn release_paths(&self, manifest: &ReleaseManifest) -> ReleasePaths {
        let releases_dir = self.project_root.join(RELEASES_DIR);
        ReleasePaths {
            project_root: self.project_root.clone(),
            staging_dir: releases_dir.join(manifest.release_name()),
            archive_path: releases_dir.join(manifest.archive_file_name()),
            checksums_path: releases_dir.join(CHECKSUMS_FILE),
            releases_dir,
        }
    }
}
