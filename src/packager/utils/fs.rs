//! File system utilities for staging.
//!
//! Provides idempotent directory resets, verbatim file copies and filtered
//! recursive directory copies with contextual error reporting.

use crate::packager::{
    error::{Error, ErrorExt, Result},
    settings::ExcludePatterns,
};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;
use walkdir::WalkDir;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading metadata of", from)?;
    if !metadata.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", from)?;
    Ok(())
}

/// Recursively copies a directory, skipping every entry whose file name
/// matches one of `excludes`.
///
/// Symlinks are followed and their targets copied as regular content; a
/// symlink cycle is reported as an error, as is any name that is not valid
/// UTF-8. The root directory itself is never filtered. Returns the copied
/// files relative to `to`, in walk order.
pub async fn copy_dir_filtered(
    from: &Path,
    to: &Path,
    excludes: &ExcludePatterns,
) -> Result<Vec<PathBuf>> {
    if !from.is_dir() {
        return Err(Error::GenericError(format!("{from:?} is not a Directory")));
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();
    let excludes = excludes.clone();

    tokio::task::spawn_blocking(move || copy_dir_filtered_blocking(&from, &to, &excludes)).await?
}

fn copy_dir_filtered_blocking(
    from: &Path,
    to: &Path,
    excludes: &ExcludePatterns,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(to).fs_context("creating directory", to)?;

    let walker = WalkDir::new(from)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let keep = !excludes.is_excluded(&entry.file_name().to_string_lossy());
            if !keep {
                log::debug!("Excluded {}", entry.path().display());
            }
            keep
        });

    let mut copied = Vec::new();
    for entry in walker {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(from)?;
        if rel_path.to_str().is_none() {
            return Err(Error::GenericError(format!(
                "{} is not valid UTF-8 and cannot be named in the archive",
                entry.path().display()
            )));
        }
        let dest_path = to.join(rel_path);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
        } else if entry.file_type().is_file() {
            std::fs::copy(entry.path(), &dest_path).fs_context("copying file", entry.path())?;
            copied.push(rel_path.to_path_buf());
        } else {
            log::debug!("Skipping special file {}", entry.path().display());
        }
    }

    Ok(copied)
}

/// Lists every regular file below `root`, relative to it, sorted.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.path().strip_prefix(root)?.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
