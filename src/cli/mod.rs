//! Command line interface for the source release packager.

mod args;

pub use args::Args;

use crate::{
    error::{ReleaseError, Result},
    metadata,
    packager::{
        Packager, PathResolver, ReleaseManifestBuilder, Reporter, paths::DEFAULT_ROOT_DEPTH,
    },
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    run_with(Args::parse_args()).await
}

/// Runs a release with already-parsed arguments.
///
/// The project root is resolved before the manifest is loaded and before
/// anything on disk is touched.
pub async fn run_with(args: Args) -> Result<i32> {
    let resolver = match &args.project_root {
        Some(root) => PathResolver::new(root),
        None => PathResolver::from_executable(DEFAULT_ROOT_DEPTH),
    }
    .map_err(ReleaseError::Path)?;
    log::debug!("Project root: {}", resolver.project_root().display());

    let manifest_path = args
        .manifest
        .clone()
        .or_else(|| metadata::discover_manifest(resolver.project_root()));
    let manifest = match manifest_path {
        Some(path) => {
            log::info!("Loading release manifest {}", path.display());
            metadata::load_manifest(&path, resolver.project_root())
        }
        None => ReleaseManifestBuilder::new().build(),
    }
    .map_err(ReleaseError::Manifest)?;

    let packager = Packager::new(manifest, &resolver, Reporter::stdout(args.quiet));
    packager.run().await?;
    Ok(0)
}
