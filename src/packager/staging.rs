//! Staging tree assembly.
//!
//! Materialises the allow-listed part of the project into a fresh staging
//! tree: directories are copied recursively minus excluded components,
//! standalone files are copied verbatim.

use crate::packager::{
    Error, Result,
    report::Reporter,
    settings::{AllowListEntry, ReleaseManifest},
    utils::fs,
};
use std::path::{Path, PathBuf};

/// What staging did with the allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagingReport {
    /// Allow-listed directories that were present and copied.
    pub directories: Vec<String>,
    /// Allow-listed files that were present and copied.
    pub files: Vec<String>,
    /// Optional entries absent from the project root.
    pub skipped: Vec<String>,
    /// Every file copied, relative to the staging root.
    pub staged_files: Vec<PathBuf>,
}

/// Copies the allow-listed project content into the staging tree.
pub struct StagingCopier<'a> {
    manifest: &'a ReleaseManifest,
    project_root: &'a Path,
    staging_dir: &'a Path,
}

impl<'a> StagingCopier<'a> {
    pub fn new(manifest: &'a ReleaseManifest, project_root: &'a Path, staging_dir: &'a Path) -> Self {
        Self {
            manifest,
            project_root,
            staging_dir,
        }
    }

    /// Deletes the staging tree if present and recreates it empty.
    pub async fn reset(&self) -> Result<()> {
        log::info!("Resetting staging tree {}", self.staging_dir.display());
        fs::create_dir_all(self.staging_dir, true).await
    }

    /// Copies allow-listed directories, then allow-listed files.
    ///
    /// Absent optional entries are skipped; an absent required entry fails
    /// before anything further is copied.
    pub async fn copy(&self, reporter: &Reporter) -> Result<StagingReport> {
        let mut report = StagingReport::default();
        log::debug!(
            "Exclude patterns: {}",
            self.manifest.excludes().globs().collect::<Vec<_>>().join(" ")
        );

        reporter.section("Copying source directories...");
        for entry in self.manifest.directories() {
            let src = self.project_root.join(entry.name());
            if !self.check_present(entry, &src, true)? {
                reporter.skip(&format!("{} (not present)", entry.name()));
                report.skipped.push(entry.name().to_string());
                continue;
            }

            let copied =
                fs::copy_dir_filtered(&src, &self.staging_dir.join(entry.name()), self.manifest.excludes())
                    .await?;
            log::debug!("Copied {} file(s) from {}", copied.len(), entry.name());
            report.staged_files.extend(
                copied
                    .into_iter()
                    .map(|rel| Path::new(entry.name()).join(rel)),
            );
            report.directories.push(entry.name().to_string());
            reporter.item(&format!("Copied {}", entry.name()));
        }

        reporter.section("Copying project files...");
        for entry in self.manifest.files() {
            let src = self.project_root.join(entry.name());
            if !self.check_present(entry, &src, false)? {
                reporter.skip(&format!("{} (not present)", entry.name()));
                report.skipped.push(entry.name().to_string());
                continue;
            }

            fs::copy_file(&src, &self.staging_dir.join(entry.name())).await?;
            report.staged_files.push(PathBuf::from(entry.name()));
            report.files.push(entry.name().to_string());
            reporter.item(&format!("Copied {}", entry.name()));
        }

        report.staged_files.sort();
        Ok(report)
    }

    /// Whether `src` exists with the expected kind. Required entries that are
    /// missing, and entries of the wrong kind, are errors.
    fn check_present(&self, entry: &AllowListEntry, src: &Path, want_dir: bool) -> Result<bool> {
        let present = if want_dir { src.is_dir() } else { src.is_file() };
        if present {
            return Ok(true);
        }
        if src.exists() {
            return Err(Error::GenericError(format!(
                "allow-listed {} `{}` exists but is not a {}",
                if want_dir { "directory" } else { "file" },
                entry.name(),
                if want_dir { "directory" } else { "regular file" },
            )));
        }
        if entry.is_required() {
            return Err(Error::GenericError(format!(
                "required {} `{}` is missing from {}",
                if want_dir { "directory" } else { "file" },
                entry.name(),
                self.project_root.display()
            )));
        }
        log::debug!("Optional entry {} not present, skipping", entry.name());
        Ok(false)
    }
}
