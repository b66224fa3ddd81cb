//! Generated release artifacts.
//!
//! Renders the per-platform build scripts, the installation guide, the
//! version descriptor and any configured extra templates directly into the
//! staging tree. Rendering is pure text substitution with Handlebars; no
//! external process runs at this stage.

pub mod template;

use crate::packager::{
    Result,
    error::ErrorExt,
    settings::{ArtifactTemplate, ReleaseManifest},
};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::{Path, PathBuf};
use template::{
    INSTALL_GUIDE_TEMPLATE, UNIX_SCRIPT_TEMPLATE, VERSION_TEMPLATE, WINDOWS_SCRIPT_TEMPLATE,
};

/// File name of the generated Windows build script.
pub const WINDOWS_SCRIPT: &str = "build_windows.bat";

/// File name of the generated Unix build script.
pub const UNIX_SCRIPT: &str = "build_unix.sh";

/// File name of the generated installation guide.
pub const INSTALL_GUIDE: &str = "INSTALL.md";

/// File name of the generated version descriptor.
pub const VERSION_FILE: &str = "VERSION.txt";

/// Placeholder written when no commit is configured.
const UNKNOWN_COMMIT: &str = "[Latest commit hash]";

/// The built-in artifact set, in generation order.
pub fn default_artifacts() -> Vec<ArtifactTemplate> {
    vec![
        ArtifactTemplate::builtin(WINDOWS_SCRIPT, WINDOWS_SCRIPT_TEMPLATE, false),
        ArtifactTemplate::builtin(UNIX_SCRIPT, UNIX_SCRIPT_TEMPLATE, true),
        ArtifactTemplate::builtin(INSTALL_GUIDE, INSTALL_GUIDE_TEMPLATE, false),
        ArtifactTemplate::builtin(VERSION_FILE, VERSION_TEMPLATE, false),
    ]
}

/// A rendered file inside the staging tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub executable: bool,
}

/// Values available to every template.
#[derive(Debug, Serialize)]
struct TemplateContext<'a> {
    product_name: &'a str,
    version: String,
    release_date: String,
    release_name: String,
    build_type: &'a str,
    features: &'a [String],
    configure_flags: String,
    git_tag: String,
    commit: &'a str,
    repository: Option<&'a str>,
    usage_snippet: &'a str,
    library_target: String,
    windows_script: &'static str,
    unix_script: &'static str,
}

impl<'a> TemplateContext<'a> {
    fn new(manifest: &'a ReleaseManifest) -> Self {
        Self {
            product_name: manifest.product_name(),
            version: manifest.version_string(),
            release_date: manifest.release_date().format("%Y-%m-%d").to_string(),
            release_name: manifest.release_name(),
            build_type: manifest.build_type(),
            features: manifest.features(),
            configure_flags: manifest.configure_flags().join(" "),
            git_tag: manifest.git_tag(),
            commit: manifest.commit().unwrap_or(UNKNOWN_COMMIT),
            repository: manifest.repository().map(|r| r.trim_end_matches('/')),
            usage_snippet: manifest.usage_snippet(),
            library_target: manifest.product_name().to_lowercase(),
            windows_script: WINDOWS_SCRIPT,
            unix_script: UNIX_SCRIPT,
        }
    }
}

/// Renders every configured artifact to text, keyed by file name.
///
/// Templates run in strict mode: a reference to an unknown variable is an
/// error rather than an empty string.
pub fn render_artifacts(manifest: &ReleaseManifest) -> Result<Vec<(ArtifactTemplate, String)>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    for artifact in manifest.artifacts() {
        handlebars.register_template_string(&artifact.file_name, artifact.source.text())?;
    }

    let context = TemplateContext::new(manifest);
    manifest
        .artifacts()
        .iter()
        .map(|artifact| {
            let text = handlebars.render(&artifact.file_name, &context)?;
            Ok((artifact.clone(), text))
        })
        .collect()
}

/// Writes every configured artifact into `staging_dir`.
///
/// Executable artifacts get mode `0o755` on Unix; all others `0o644`.
pub async fn generate_artifacts(
    manifest: &ReleaseManifest,
    staging_dir: &Path,
) -> Result<Vec<GeneratedArtifact>> {
    let rendered = render_artifacts(manifest)?;
    let mut generated = Vec::with_capacity(rendered.len());

    for (artifact, text) in rendered {
        let path = staging_dir.join(&artifact.file_name);
        tokio::fs::write(&path, text.as_bytes())
            .await
            .fs_context("writing generated artifact", &path)?;
        set_mode(&path, artifact.executable).await?;

        log::debug!(
            "Generated {} (executable: {})",
            path.display(),
            artifact.executable
        );
        generated.push(GeneratedArtifact {
            path,
            executable: artifact.executable,
        });
    }

    Ok(generated)
}

#[cfg(unix)]
async fn set_mode(path: &Path, executable: bool) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mode = if executable { 0o755 } else { 0o644 };
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .await
        .fs_context("setting permissions on", path)
}

#[cfg(not(unix))]
async fn set_mode(_path: &Path, _executable: bool) -> Result<()> {
    Ok(())
}
