//! Allow-list entries and exclude patterns.

use crate::packager::{Error, Result, paths::RELEASES_DIR};
use glob::Pattern;
use std::path::{Component, Path, PathBuf};

/// One directory or file name eligible for inclusion in a release.
///
/// A `required` entry that is absent from the project root aborts staging;
/// an optional one is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowListEntry {
    name: String,
    required: bool,
}

impl AllowListEntry {
    /// Entry that is staged only when present.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }

    /// Entry whose absence is fatal.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    /// Relative name below the project root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether absence is an error.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The name with `.` components removed, e.g. `./docs` -> `docs`.
    pub fn normalized(&self) -> PathBuf {
        Path::new(&self.name)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }

    /// Rejects empty, absolute and parent-escaping names, the project root
    /// itself, and anything inside the release output directory.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::GenericError("allow-list entry has an empty name".into()));
        }
        let escapes = Path::new(&self.name)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(Error::GenericError(format!(
                "allow-list entry `{}` must be a relative path inside the project root",
                self.name
            )));
        }

        let normalized = self.normalized();
        if normalized.as_os_str().is_empty() {
            return Err(Error::GenericError(format!(
                "allow-list entry `{}` names the project root",
                self.name
            )));
        }
        if normalized.starts_with(RELEASES_DIR) {
            return Err(Error::GenericError(format!(
                "allow-list entry `{}` is inside the `{RELEASES_DIR}` output directory",
                self.name
            )));
        }
        Ok(())
    }
}

/// Compiled exclude globs, matched against single path components.
#[derive(Debug, Clone, Default)]
pub struct ExcludePatterns {
    patterns: Vec<Pattern>,
}

impl ExcludePatterns {
    /// Compiles every glob, failing on the first invalid one.
    pub fn new<I, S>(globs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = globs
            .into_iter()
            .map(|g| Pattern::new(g.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// True when `component` (a bare file or directory name) matches any glob.
    pub fn is_excluded(&self, component: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(component))
    }

    /// The source globs, in configuration order.
    pub fn globs(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::settings::DEFAULT_EXCLUDES;

    #[test]
    fn default_excludes_match_build_outputs() {
        let ex = ExcludePatterns::new(DEFAULT_EXCLUDES).unwrap();
        for name in [
            "main.obj",
            "app.exe",
            "core.dll",
            "core.lib",
            "core.pdb",
            "__pycache__",
            "mod.pyc",
            ".git",
            ".gitattributes",
            "build",
            "build-release",
            "cmake-build-debug",
        ] {
            assert!(ex.is_excluded(name), "{name} should be excluded");
        }
    }

    #[test]
    fn default_excludes_keep_sources() {
        let ex = ExcludePatterns::new(DEFAULT_EXCLUDES).unwrap();
        for name in ["foo.cpp", "tinakit.hpp", "CMakeLists.txt", "docs", "rebuild.md"] {
            assert!(!ex.is_excluded(name), "{name} should be kept");
        }
    }

    #[test]
    fn invalid_glob_is_rejected() {
        assert!(ExcludePatterns::new(["[unclosed"]).is_err());
    }

    #[test]
    fn entry_validation_rejects_escaping_paths() {
        assert!(AllowListEntry::optional("src").validate().is_ok());
        assert!(AllowListEntry::optional("docs/api").validate().is_ok());
        assert!(AllowListEntry::optional("").validate().is_err());
        assert!(AllowListEntry::optional("../secrets").validate().is_err());
        assert!(AllowListEntry::optional("/etc").validate().is_err());
    }

    #[test]
    fn entry_validation_rejects_root_and_release_output() {
        for name in [".", "./.", "releases", "./releases", "releases/tinakit-v1.0.0"] {
            assert!(
                AllowListEntry::optional(name).validate().is_err(),
                "{name} should be rejected"
            );
        }
        assert!(AllowListEntry::optional("./docs").validate().is_ok());
        assert!(AllowListEntry::optional("releases_notes").validate().is_ok());
    }

    #[test]
    fn normalized_drops_current_dir_components() {
        assert_eq!(AllowListEntry::optional("./docs/./api").normalized(), Path::new("docs/api"));
        assert!(AllowListEntry::optional(".").normalized().as_os_str().is_empty());
    }
}
