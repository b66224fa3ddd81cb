//! Builder for constructing ReleaseManifest.

use super::{
    AllowListEntry, ArtifactTemplate, DEFAULT_BUILD_TYPE, DEFAULT_DIRECTORIES, DEFAULT_EXCLUDES,
    DEFAULT_FEATURES, DEFAULT_FILES, DEFAULT_PRODUCT_NAME, DEFAULT_RELEASE_DATE,
    DEFAULT_USAGE_SNIPPET, DEFAULT_VERSION, ExcludePatterns, HookCommand, ReleaseManifest,
};
use crate::packager::{
    artifacts::default_artifacts,
    error::{Context, Error, Result},
};
use chrono::NaiveDate;
use semver::Version;
use std::{collections::HashSet, path::Path};

/// Builder for [`ReleaseManifest`].
///
/// Every field starts at the release defaults; setters override them.
/// Extra artifacts are appended to the built-in set.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_source::packager::{AllowListEntry, ReleaseManifestBuilder};
///
/// # fn example() -> kodegen_bundler_source::packager::Result<()> {
/// let manifest = ReleaseManifestBuilder::new()
///     .product_name("TinaKit")
///     .version("1.0.0")?
///     .release_date("2025-06-21")?
///     .directories(vec![AllowListEntry::required("src")])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReleaseManifestBuilder {
    product_name: String,
    version: Option<Version>,
    release_date: Option<NaiveDate>,
    build_type: String,
    features: Vec<String>,
    repository: Option<String>,
    commit: Option<String>,
    usage_snippet: String,
    directories: Vec<AllowListEntry>,
    files: Vec<AllowListEntry>,
    excludes: Vec<String>,
    configure_flags: Option<Vec<String>>,
    extra_artifacts: Vec<ArtifactTemplate>,
    hooks: Vec<HookCommand>,
}

impl Default for ReleaseManifestBuilder {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            version: None,
            release_date: None,
            build_type: DEFAULT_BUILD_TYPE.to_string(),
            features: DEFAULT_FEATURES.iter().map(|s| s.to_string()).collect(),
            repository: None,
            commit: None,
            usage_snippet: DEFAULT_USAGE_SNIPPET.to_string(),
            directories: DEFAULT_DIRECTORIES
                .iter()
                .map(|d| AllowListEntry::optional(*d))
                .collect(),
            files: DEFAULT_FILES
                .iter()
                .map(|f| AllowListEntry::optional(*f))
                .collect(),
            excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            configure_flags: None,
            extra_artifacts: Vec::new(),
            hooks: Vec::new(),
        }
    }
}

impl ReleaseManifestBuilder {
    /// Creates a builder populated with the release defaults.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Sets the version from a semver string.
    pub fn version(mut self, version: &str) -> Result<Self> {
        let parsed = Version::parse(version.trim_start_matches('v'))
            .context(format!("invalid release version `{version}`"))?;
        self.version = Some(parsed);
        Ok(self)
    }

    pub fn version_value(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the release date from an ISO `YYYY-MM-DD` string.
    pub fn release_date(mut self, date: &str) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .context(format!("invalid release date `{date}` (expected YYYY-MM-DD)"))?;
        self.release_date = Some(parsed);
        Ok(self)
    }

    pub fn release_date_value(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }

    pub fn build_type(mut self, build_type: impl Into<String>) -> Self {
        self.build_type = build_type.into();
        self
    }

    pub fn features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    pub fn repository(mut self, url: impl Into<String>) -> Self {
        self.repository = Some(url.into());
        self
    }

    pub fn commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }

    pub fn usage_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.usage_snippet = snippet.into();
        self
    }

    /// Replaces the directory allow-list.
    pub fn directories(mut self, entries: Vec<AllowListEntry>) -> Self {
        self.directories = entries;
        self
    }

    /// Replaces the standalone-file allow-list.
    pub fn files(mut self, entries: Vec<AllowListEntry>) -> Self {
        self.files = entries;
        self
    }

    /// Replaces the exclude globs.
    pub fn excludes(mut self, globs: Vec<String>) -> Self {
        self.excludes = globs;
        self
    }

    /// Replaces the configure-step flags.
    ///
    /// Default: release build type plus the project's tests/examples switches.
    pub fn configure_flags(mut self, flags: Vec<String>) -> Self {
        self.configure_flags = Some(flags);
        self
    }

    /// Adds an artifact rendered after the built-in ones.
    pub fn artifact(mut self, artifact: ArtifactTemplate) -> Self {
        self.extra_artifacts.push(artifact);
        self
    }

    pub fn hook(mut self, hook: HookCommand) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Validates and builds the manifest.
    ///
    /// # Errors
    ///
    /// - empty or path-like product name
    /// - allow-list entries escaping the project root, naming the root
    ///   itself, or pointing into the release output directory
    /// - invalid exclude globs
    /// - artifact names that are not plain file names, or are duplicated
    /// - allow-list entries a generated artifact would overwrite
    pub fn build(self) -> Result<ReleaseManifest> {
        let product_name = self.product_name.trim().to_string();
        if product_name.is_empty() {
            return Err(Error::GenericError("product name must not be empty".into()));
        }
        if product_name.contains(['/', '\\']) || product_name.chars().any(char::is_whitespace) {
            return Err(Error::GenericError(format!(
                "product name `{product_name}` must not contain separators or whitespace"
            )));
        }

        for entry in self.directories.iter().chain(self.files.iter()) {
            entry.validate()?;
        }

        let excludes = ExcludePatterns::new(&self.excludes)?;

        let mut artifacts = default_artifacts();
        artifacts.extend(self.extra_artifacts);
        let mut seen = HashSet::new();
        for artifact in &artifacts {
            artifact.validate()?;
            if !seen.insert(artifact.file_name.as_str()) {
                return Err(Error::GenericError(format!(
                    "artifact `{}` is defined more than once",
                    artifact.file_name
                )));
            }
        }

        // Artifacts are written after staging and would replace staged content.
        for entry in self.directories.iter().chain(self.files.iter()) {
            let staged = entry.normalized();
            if let Some(artifact) = artifacts
                .iter()
                .find(|a| staged == Path::new(&a.file_name))
            {
                return Err(Error::GenericError(format!(
                    "allow-list entry `{}` collides with generated artifact `{}`",
                    entry.name(),
                    artifact.file_name
                )));
            }
        }

        let version = match self.version {
            Some(v) => v,
            None => Version::parse(DEFAULT_VERSION).context("invalid default version")?,
        };
        let release_date = match self.release_date {
            Some(d) => d,
            None => NaiveDate::parse_from_str(DEFAULT_RELEASE_DATE, "%Y-%m-%d")
                .context("invalid default release date")?,
        };

        let configure_flags = self
            .configure_flags
            .unwrap_or_else(|| default_configure_flags(&product_name));

        Ok(ReleaseManifest {
            product_name,
            version,
            release_date,
            build_type: self.build_type,
            features: self.features,
            repository: self.repository,
            commit: self.commit,
            usage_snippet: self.usage_snippet,
            directories: self.directories,
            files: self.files,
            excludes,
            configure_flags,
            artifacts,
            hooks: self.hooks,
        })
    }
}

/// `-DCMAKE_BUILD_TYPE=Release -D<PREFIX>_BUILD_TESTS=ON -D<PREFIX>_BUILD_EXAMPLES=ON`
fn default_configure_flags(product_name: &str) -> Vec<String> {
    let prefix: String = product_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    vec![
        "-DCMAKE_BUILD_TYPE=Release".to_string(),
        format!("-D{prefix}_BUILD_TESTS=ON"),
        format!("-D{prefix}_BUILD_EXAMPLES=ON"),
    ]
}
