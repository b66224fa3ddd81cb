//! Release manifest loading from `release.toml`.
//!
//! Every section and field is optional; anything omitted keeps the
//! [`ReleaseManifestBuilder`] default.
//!
//! ```toml
//! [package]
//! name = "TinaKit"
//! version = "1.0.0"
//! release_date = "2025-06-21"
//! features = ["Complete Excel (.xlsx) support"]
//!
//! [staging]
//! directories = [{ name = "src", required = true }, { name = "docs" }]
//! files = [{ name = "README.md" }]
//! exclude = ["*.obj", "build*"]
//!
//! [build]
//! configure_flags = ["-DCMAKE_BUILD_TYPE=Release"]
//!
//! [[artifacts]]
//! file = "NOTES.txt"
//! template = "packaging/notes.hbs"
//!
//! [[hooks]]
//! program = "git"
//! args = ["status", "--porcelain"]
//! ```

use crate::packager::{
    AllowListEntry, ArtifactTemplate, HookCommand, ReleaseManifest, ReleaseManifestBuilder,
    error::{Context, ErrorExt, Result},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest file looked up at the project root when none is given.
pub const RELEASE_MANIFEST_FILE: &str = "release.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReleaseToml {
    #[serde(default)]
    package: PackageSection,
    #[serde(default)]
    staging: StagingSection,
    #[serde(default)]
    build: BuildSection,
    #[serde(default)]
    artifacts: Vec<ArtifactSection>,
    #[serde(default)]
    hooks: Vec<HookSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PackageSection {
    name: Option<String>,
    version: Option<semver::Version>,
    release_date: Option<chrono::NaiveDate>,
    build_type: Option<String>,
    features: Option<Vec<String>>,
    repository: Option<String>,
    commit: Option<String>,
    usage_snippet: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StagingSection {
    directories: Option<Vec<EntrySection>>,
    files: Option<Vec<EntrySection>>,
    exclude: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntrySection {
    name: String,
    #[serde(default)]
    required: bool,
}

impl From<EntrySection> for AllowListEntry {
    fn from(entry: EntrySection) -> Self {
        if entry.required {
            AllowListEntry::required(entry.name)
        } else {
            AllowListEntry::optional(entry.name)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BuildSection {
    configure_flags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ArtifactSection {
    file: String,
    template: PathBuf,
    #[serde(default)]
    executable: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HookSection {
    program: String,
    #[serde(default)]
    args: Vec<String>,
}

/// Returns `<project_root>/release.toml` if it exists.
pub fn discover_manifest(project_root: &Path) -> Option<PathBuf> {
    let candidate = project_root.join(RELEASE_MANIFEST_FILE);
    candidate.is_file().then_some(candidate)
}

/// Reads and parses a release manifest file once.
///
/// Artifact template paths are resolved relative to `project_root` and read
/// eagerly, so the returned manifest needs no further I/O.
pub fn load_manifest(manifest_path: &Path, project_root: &Path) -> Result<ReleaseManifest> {
    let text = std::fs::read_to_string(manifest_path)
        .fs_context("reading release manifest", manifest_path)?;
    parse_manifest(&text, project_root)
        .context(format!("invalid release manifest {}", manifest_path.display()))
}

/// Parses manifest text into a validated [`ReleaseManifest`].
pub fn parse_manifest(text: &str, project_root: &Path) -> Result<ReleaseManifest> {
    let parsed = toml::from_str::<ReleaseToml>(text).context("failed to parse TOML")?;
    let mut builder = ReleaseManifestBuilder::new();

    let package = parsed.package;
    if let Some(name) = package.name {
        builder = builder.product_name(name);
    }
    if let Some(version) = package.version {
        builder = builder.version_value(version);
    }
    if let Some(date) = package.release_date {
        builder = builder.release_date_value(date);
    }
    if let Some(build_type) = package.build_type {
        builder = builder.build_type(build_type);
    }
    if let Some(features) = package.features {
        builder = builder.features(features);
    }
    if let Some(repository) = package.repository {
        builder = builder.repository(repository);
    }
    if let Some(commit) = package.commit {
        builder = builder.commit(commit);
    }
    if let Some(snippet) = package.usage_snippet {
        builder = builder.usage_snippet(snippet.trim_end().to_string());
    }

    let staging = parsed.staging;
    if let Some(dirs) = staging.directories {
        builder = builder.directories(dirs.into_iter().map(Into::into).collect());
    }
    if let Some(files) = staging.files {
        builder = builder.files(files.into_iter().map(Into::into).collect());
    }
    if let Some(exclude) = staging.exclude {
        builder = builder.excludes(exclude);
    }

    if let Some(flags) = parsed.build.configure_flags {
        builder = builder.configure_flags(flags);
    }

    for artifact in parsed.artifacts {
        let template_path = project_root.join(&artifact.template);
        let template = std::fs::read_to_string(&template_path)
            .fs_context("reading artifact template", &template_path)?;
        log::debug!(
            "Loaded template for {} from {}",
            artifact.file,
            template_path.display()
        );
        builder = builder.artifact(ArtifactTemplate::inline(
            artifact.file,
            template,
            artifact.executable,
        ));
    }

    for hook in parsed.hooks {
        builder = builder.hook(HookCommand::new(hook.program, hook.args));
    }

    builder.build()
}
