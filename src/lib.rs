//! Source release packager library
//!
//! This library provides the release-assembly pipeline:
//! - staging an allow-listed, exclude-filtered copy of a project
//! - rendering per-platform build scripts, an install guide and a version descriptor
//! - writing a deterministic zip archive rooted at the release name
//! - recording SHA-256 and MD5 digests of the archive
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod packager;

// Re-export commonly used types
pub use error::{ReleaseError, Result};
