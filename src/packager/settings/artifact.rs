//! Generated-artifact templates.

use crate::packager::{Error, Result};
use std::path::{Component, Path};

/// Where a template's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled into the binary.
    Builtin(&'static str),
    /// Loaded at configuration time (e.g. from a file named in `release.toml`).
    Inline(String),
}

impl TemplateSource {
    pub fn text(&self) -> &str {
        match self {
            TemplateSource::Builtin(s) => s,
            TemplateSource::Inline(s) => s,
        }
    }
}

/// A file rendered into the staging tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactTemplate {
    /// File name inside the staging tree.
    pub file_name: String,
    /// Handlebars template text.
    pub source: TemplateSource,
    /// Whether the rendered file gets the executable bit on Unix.
    pub executable: bool,
}

impl ArtifactTemplate {
    pub fn builtin(file_name: &str, text: &'static str, executable: bool) -> Self {
        Self {
            file_name: file_name.to_string(),
            source: TemplateSource::Builtin(text),
            executable,
        }
    }

    pub fn inline(file_name: impl Into<String>, text: impl Into<String>, executable: bool) -> Self {
        Self {
            file_name: file_name.into(),
            source: TemplateSource::Inline(text.into()),
            executable,
        }
    }

    /// Generated artifacts live directly in the staging root.
    pub(crate) fn validate(&self) -> Result<()> {
        let mut components = Path::new(&self.file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(Error::GenericError(format!(
                "artifact name `{}` must be a plain file name",
                self.file_name
            ))),
        }
    }
}
