//! Main release pipeline.
//!
//! This module provides the [`Packager`], which runs every stage strictly in
//! sequence and tags the first failure with the stage it came from.

use super::checksum::{ChecksumRecord, write_checksum_manifest};
use crate::{
    error::{ReleaseError, Result},
    packager::{
        ReleaseManifest,
        archive::{ArchiveSummary, create_archive},
        artifacts::{GeneratedArtifact, generate_artifacts},
        hooks::run_hooks,
        paths::{PathResolver, ReleasePaths},
        report::Reporter,
        staging::{StagingCopier, StagingReport},
    },
};

/// Everything a successful run produced.
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    pub paths: ReleasePaths,
    pub staging: StagingReport,
    pub artifacts: Vec<GeneratedArtifact>,
    pub archive: ArchiveSummary,
    pub checksums: Vec<ChecksumRecord>,
}

/// Release pipeline orchestrator.
///
/// Owns the immutable [`ReleaseManifest`] for the run and hands it by
/// reference to every stage.
#[derive(Debug)]
pub struct Packager {
    manifest: ReleaseManifest,
    paths: ReleasePaths,
    reporter: Reporter,
}

impl Packager {
    /// Creates a packager for `manifest` rooted where `resolver` points.
    pub fn new(manifest: ReleaseManifest, resolver: &PathResolver, reporter: Reporter) -> Self {
        let paths = resolver.release_paths(&manifest);
        Self {
            manifest,
            paths,
            reporter,
        }
    }

    pub fn manifest(&self) -> &ReleaseManifest {
        &self.manifest
    }

    pub fn paths(&self) -> &ReleasePaths {
        &self.paths
    }

    /// Runs the whole pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure, tagged with its [`ReleaseError`] kind.
    /// Nothing is rolled back.
    pub async fn run(&self) -> Result<ReleaseOutcome> {
        let manifest = &self.manifest;
        let paths = &self.paths;
        let reporter = &self.reporter;

        reporter.banner(&format!(
            "Creating {} v{} Release Package...",
            manifest.product_name(),
            manifest.version()
        ));
        reporter.info(&format!("📁 Project root: {}", paths.project_root.display()));

        run_hooks(manifest.hooks(), &paths.project_root, reporter)
            .await
            .map_err(ReleaseError::Hook)?;

        log::info!("Staging release {}", manifest.release_name());
        let copier = StagingCopier::new(manifest, &paths.project_root, &paths.staging_dir);
        copier.reset().await.map_err(ReleaseError::Copy)?;
        reporter.info(&format!("📦 Release directory: {}", paths.staging_dir.display()));
        let staging = copier.copy(reporter).await.map_err(ReleaseError::Copy)?;

        log::info!("Generating release artifacts");
        reporter.section("Creating build scripts and documentation...");
        let artifacts = generate_artifacts(manifest, &paths.staging_dir)
            .await
            .map_err(ReleaseError::Generation)?;
        for artifact in &artifacts {
            if let Some(name) = artifact.path.file_name() {
                reporter.item(&format!("Created {}", name.to_string_lossy()));
            }
        }

        log::info!("Writing archive {}", paths.archive_path.display());
        reporter.section("Creating ZIP package...");
        let archive = create_archive(&paths.staging_dir, &paths.archive_path)
            .await
            .map_err(ReleaseError::Archive)?;
        reporter.item(&format!("Created ZIP package: {}", archive.path.display()));

        log::info!("Calculating checksums");
        reporter.section("Generating checksums...");
        let title = format!(
            "{} v{} Checksums",
            manifest.product_name(),
            manifest.version()
        );
        let checksums = write_checksum_manifest(&title, &archive.path, &paths.checksums_path)
            .await
            .map_err(ReleaseError::Checksum)?;
        reporter.item(&format!(
            "Generated checksums: {}",
            paths.checksums_path.display()
        ));

        let outcome = ReleaseOutcome {
            paths: paths.clone(),
            staging,
            artifacts,
            archive,
            checksums,
        };
        reporter.summary(&outcome);
        Ok(outcome)
    }
}
