//! Source release packaging.
//!
//! Stages an allow-listed, exclude-filtered copy of a project, renders build
//! scripts and documentation into it, zips it under a self-named folder and
//! records SHA-256/MD5 digests of the archive.

pub mod archive;
pub mod artifacts;
pub mod builder;
pub mod error;
pub mod hooks;
pub mod paths;
pub mod report;
pub mod settings;
pub mod staging;
pub mod utils;

pub use builder::{ChecksumAlgorithm, ChecksumRecord, Packager, ReleaseOutcome};
pub use error::{Error, Result};
pub use paths::{PathResolver, ReleasePaths};
pub use report::Reporter;
pub use settings::{
    AllowListEntry, ArtifactTemplate, HookCommand, ReleaseManifest, ReleaseManifestBuilder,
};
