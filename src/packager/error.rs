//! Error types for packaging operations.
//!
//! Every stage of the pipeline reports failures through [`Error`]. The
//! [`ErrorExt`] and [`Context`] extensions attach the operation and path
//! that failed so the message printed to the user is actionable.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as DeriveError;

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a release.
#[derive(Debug, DeriveError)]
pub enum Error {
    /// Generic failure with a message.
    #[error("{0}")]
    GenericError(String),

    /// Bare I/O error without additional context.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// I/O error with the operation and path that caused it.
    #[error("{context} `{}`: {source}", path.display())]
    Fs {
        /// What was being attempted.
        context: &'static str,
        /// Path the operation targeted.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// Directory traversal failure (permissions, symlink cycles).
    #[error("failed to walk directory tree: {0}")]
    WalkError(#[from] walkdir::Error),

    /// Path prefix mismatch while computing relative paths.
    #[error("{0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Invalid exclude glob.
    #[error("invalid exclude pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    /// Archive writer failure.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Template registration failure.
    #[error("template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Template rendering failure.
    #[error("render error: {0}")]
    Render(#[from] Box<handlebars::RenderError>),

    /// A blocking task was cancelled or panicked.
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<handlebars::TemplateError> for Error {
    fn from(e: handlebars::TemplateError) -> Self {
        Error::Template(Box::new(e))
    }
}

impl From<handlebars::RenderError> for Error {
    fn from(e: handlebars::RenderError) -> Self {
        Error::Render(Box::new(e))
    }
}

/// Attach filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps the error with the operation description and the path involved.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Convert `Option`s and foreign errors into [`Error::GenericError`] with a message.
pub trait Context<T> {
    /// Replaces the missing value or error with `msg`.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Return early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::packager::Error::GenericError(format!($($arg)*)))
    };
}
