//! Command line argument parsing.
//!
//! Every flag is optional: without arguments the packager resolves the
//! project root from its own location and uses `release.toml` if present,
//! otherwise the built-in release defaults.

use clap::Parser;
use std::path::PathBuf;

/// Source release packager
#[derive(Parser, Debug, Default)]
#[command(
    name = "kodegen_bundler_source",
    version,
    about = "Assembles a reproducible source release package",
    long_about = "Stages an allow-listed, filtered copy of the project, generates build scripts,
an installation guide and a version descriptor, zips everything under a
self-named folder and writes SHA256/MD5 checksums.

Outputs (under <project-root>/releases/):
  <release-name>/        staging tree
  <release-name>.zip     release archive
  checksums.txt          checksum manifest

Exit codes: 0 success, 3 path, 4 copy, 5 generation, 6 archive,
7 checksum, 8 manifest, 9 pre-release command."
)]
pub struct Args {
    /// Project root (default: two levels above the executable's directory)
    #[arg(long, value_name = "PATH")]
    pub project_root: Option<PathBuf>,

    /// Release manifest TOML (default: <project-root>/release.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
