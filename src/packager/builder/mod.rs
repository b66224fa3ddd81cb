//! Release orchestration.
//!
//! This module provides the [`Packager`] that runs the release pipeline
//! end to end:
//!
//! 1. Run configured pre-release commands
//! 2. Reset the staging tree
//! 3. Copy allow-listed content
//! 4. Generate scripts, install guide and version descriptor
//! 5. Write the archive
//! 6. Hash the closed archive and write the checksum manifest
//! 7. Report the summary
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_source::packager::{Packager, PathResolver, ReleaseManifestBuilder, Reporter};
//!
//! # async fn example() -> kodegen_bundler_source::Result<()> {
//! let manifest = ReleaseManifestBuilder::new().build().unwrap();
//! let resolver = PathResolver::new(".").unwrap();
//! let packager = Packager::new(manifest, &resolver, Reporter::stdout(false));
//! let outcome = packager.run().await?;
//! println!("{} ({} bytes)", outcome.archive.path.display(), outcome.archive.size);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`checksum`] - digest calculation and checksum manifest
//! - [`orchestrator`] - the [`Packager`] pipeline

pub mod checksum;
mod orchestrator;

pub use checksum::{ChecksumAlgorithm, ChecksumRecord};
pub use orchestrator::{Packager, ReleaseOutcome};
