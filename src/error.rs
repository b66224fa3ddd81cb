//! Fatal error taxonomy for release runs.
//!
//! Every pipeline stage failure is tagged with the stage it happened in and
//! mapped to its own process exit code.

use crate::packager;
use thiserror::Error;

/// Result type alias for release runs.
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Exit code for a missing or unusable project root.
pub const EXIT_PATH: i32 = 3;
/// Exit code for staging failures.
pub const EXIT_COPY: i32 = 4;
/// Exit code for artifact generation failures.
pub const EXIT_GENERATION: i32 = 5;
/// Exit code for archive failures.
pub const EXIT_ARCHIVE: i32 = 6;
/// Exit code for checksum failures.
pub const EXIT_CHECKSUM: i32 = 7;
/// Exit code for an unreadable or invalid release manifest.
pub const EXIT_MANIFEST: i32 = 8;
/// Exit code for a failed pre-release command.
pub const EXIT_HOOK: i32 = 9;

/// A fatal failure that aborted the release run.
///
/// No stage recovers locally. Whatever was written before the failure stays
/// on disk; the next run discards the staging tree before copying.
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Project root missing; raised before anything is mutated.
    #[error("Path error: {0}")]
    Path(#[source] packager::Error),

    /// Release manifest could not be read or is invalid.
    #[error("Manifest error: {0}")]
    Manifest(#[source] packager::Error),

    /// Pre-release command failed.
    #[error("Hook error: {0}")]
    Hook(#[source] packager::Error),

    /// Staging tree could not be reset or populated.
    #[error("Copy error: {0}")]
    Copy(#[source] packager::Error),

    /// A generated artifact could not be rendered or written.
    #[error("Generation error: {0}")]
    Generation(#[source] packager::Error),

    /// The archive could not be written; it may be truncated.
    #[error("Archive error: {0}")]
    Archive(#[source] packager::Error),

    /// The archive could not be hashed or the manifest written.
    #[error("Checksum error: {0}")]
    Checksum(#[source] packager::Error),
}

impl ReleaseError {
    /// Process exit status for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReleaseError::Path(_) => EXIT_PATH,
            ReleaseError::Copy(_) => EXIT_COPY,
            ReleaseError::Generation(_) => EXIT_GENERATION,
            ReleaseError::Archive(_) => EXIT_ARCHIVE,
            ReleaseError::Checksum(_) => EXIT_CHECKSUM,
            ReleaseError::Manifest(_) => EXIT_MANIFEST,
            ReleaseError::Hook(_) => EXIT_HOOK,
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        let hints: &[&str] = match self {
            ReleaseError::Path(_) => &[
                "Run the packager from its build location inside the project",
                "Or pass --project-root <PATH> explicitly",
            ],
            ReleaseError::Manifest(_) => &[
                "Check release.toml (or the file given with --manifest) for syntax errors",
                "Dates must be YYYY-MM-DD and versions valid semver",
            ],
            ReleaseError::Hook(_) => &[
                "Run the failing command by hand at the project root to see its output",
            ],
            ReleaseError::Copy(_) => &[
                "Check read permissions on the project and free space under releases/",
                "Look for symlink cycles inside the staged directories",
            ],
            ReleaseError::Generation(_) | ReleaseError::Checksum(_) => {
                &["Check write permissions and free space under releases/"]
            }
            ReleaseError::Archive(_) => &[
                "Check free space under releases/; the partial archive is not usable",
            ],
        };
        let mut out: Vec<String> = hints.iter().map(|s| s.to_string()).collect();
        out.push("Rerun the packager after fixing the cause; it starts from a clean staging tree".into());
        out
    }
}
