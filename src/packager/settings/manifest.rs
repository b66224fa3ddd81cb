//! Core ReleaseManifest struct and accessors.

use super::{AllowListEntry, ArtifactTemplate, ExcludePatterns, HookCommand};
use chrono::NaiveDate;
use semver::Version;

/// Immutable description of a release.
///
/// Construct through [`ReleaseManifestBuilder`](super::ReleaseManifestBuilder);
/// `build()` validates names and globs so later stages can trust the values.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_source::packager::ReleaseManifestBuilder;
///
/// # fn example() -> kodegen_bundler_source::packager::Result<()> {
/// let manifest = ReleaseManifestBuilder::new()
///     .product_name("TinaKit")
///     .version("1.2.0")?
///     .build()?;
/// assert_eq!(manifest.release_name(), "tinakit-v1.2.0");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReleaseManifest {
    pub(super) product_name: String,
    pub(super) version: Version,
    pub(super) release_date: NaiveDate,
    pub(super) build_type: String,
    pub(super) features: Vec<String>,
    pub(super) repository: Option<String>,
    pub(super) commit: Option<String>,
    pub(super) usage_snippet: String,
    pub(super) directories: Vec<AllowListEntry>,
    pub(super) files: Vec<AllowListEntry>,
    pub(super) excludes: ExcludePatterns,
    pub(super) configure_flags: Vec<String>,
    pub(super) artifacts: Vec<ArtifactTemplate>,
    pub(super) hooks: Vec<HookCommand>,
}

impl ReleaseManifest {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the release version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Returns the version as text (e.g. `1.0.0`).
    pub fn version_string(&self) -> String {
        self.version.to_string()
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn build_type(&self) -> &str {
        &self.build_type
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn commit(&self) -> Option<&str> {
        self.commit.as_deref()
    }

    pub fn usage_snippet(&self) -> &str {
        &self.usage_snippet
    }

    /// Allow-listed directories, in staging order.
    pub fn directories(&self) -> &[AllowListEntry] {
        &self.directories
    }

    /// Allow-listed standalone files, in staging order.
    pub fn files(&self) -> &[AllowListEntry] {
        &self.files
    }

    pub fn excludes(&self) -> &ExcludePatterns {
        &self.excludes
    }

    /// Arguments passed to the configure step of the generated build scripts.
    pub fn configure_flags(&self) -> &[String] {
        &self.configure_flags
    }

    /// Templates rendered into the staging root.
    pub fn artifacts(&self) -> &[ArtifactTemplate] {
        &self.artifacts
    }

    pub fn hooks(&self) -> &[HookCommand] {
        &self.hooks
    }

    /// Folder name of the staging tree and archive root, e.g. `tinakit-v1.0.0`.
    pub fn release_name(&self) -> String {
        format!("{}-v{}", self.product_name.to_lowercase(), self.version)
    }

    /// Archive file name, e.g. `tinakit-v1.0.0.zip`.
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", self.release_name())
    }

    /// Version-control tag for this release.
    pub fn git_tag(&self) -> String {
        format!("v{}", self.version)
    }
}
