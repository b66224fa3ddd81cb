//! Release archive creation.
//!
//! Every regular file in the staging tree becomes one deflate-compressed zip
//! entry named relative to the staging tree's parent, so extraction yields a
//! single folder named after the release. Entries are written in sorted
//! order with a fixed timestamp; identical staging trees produce identical
//! archives.

use crate::packager::{
    Result,
    error::{Context, ErrorExt},
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use walkdir::WalkDir;
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

/// One staged file and its name inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// `/`-separated path starting with the release name.
    pub archive_path: String,
    pub source_path: PathBuf,
}

/// Result of writing an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Archive-relative names, in write order.
    pub entries: Vec<String>,
    /// Size of the closed archive file in bytes.
    pub size: u64,
}

/// Collects one entry per regular file below `staging_dir`, sorted by
/// archive path.
pub fn collect_entries(staging_dir: &Path) -> Result<Vec<ArchiveEntry>> {
    let base = staging_dir
        .parent()
        .context(format!("{} has no parent directory", staging_dir.display()))?;

    let mut entries = Vec::new();
    for entry in WalkDir::new(staging_dir).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(base)?;
        let archive_path = rel
            .components()
            .map(|c| {
                c.as_os_str()
                    .to_str()
                    .context(format!("{} is not valid UTF-8", entry.path().display()))
            })
            .collect::<Result<Vec<_>>>()?
            .join("/");
        entries.push(ArchiveEntry {
            archive_path,
            source_path: entry.path().to_path_buf(),
        });
    }

    entries.sort_by(|a, b| a.archive_path.cmp(&b.archive_path));
    Ok(entries)
}

/// Writes `entries` into a new zip at `archive_path`, streaming each file.
///
/// The archive is finished, flushed and synced before this returns; the
/// file handle is closed on every exit path.
pub fn write_archive(entries: &[ArchiveEntry], archive_path: &Path) -> Result<ArchiveSummary> {
    let file = File::create(archive_path).fs_context("creating archive", archive_path)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));

    let mut names = Vec::with_capacity(entries.len());
    for entry in entries {
        let meta = std::fs::metadata(&entry.source_path)
            .fs_context("reading metadata of", &entry.source_path)?;
        let options = entry_options(file_mode(&meta), meta.len());
        zip.start_file(entry.archive_path.as_str(), options)?;

        let mut src =
            File::open(&entry.source_path).fs_context("opening staged file", &entry.source_path)?;
        std::io::copy(&mut src, &mut zip).fs_context("compressing staged file", &entry.source_path)?;

        log::debug!("Archived {}", entry.archive_path);
        names.push(entry.archive_path.clone());
    }

    let mut writer = zip.finish()?;
    writer.flush().fs_context("flushing archive", archive_path)?;
    let file = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .fs_context("flushing archive", archive_path)?;
    file.sync_all().fs_context("syncing archive", archive_path)?;
    drop(file);

    let size = std::fs::metadata(archive_path)
        .fs_context("reading archive metadata", archive_path)?
        .len();

    Ok(ArchiveSummary {
        path: archive_path.to_path_buf(),
        entries: names,
        size,
    })
}

/// Archives the whole staging tree at `archive_path`.
pub async fn create_archive(staging_dir: &Path, archive_path: &Path) -> Result<ArchiveSummary> {
    let staging_dir = staging_dir.to_path_buf();
    let archive_path = archive_path.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let entries = collect_entries(&staging_dir)?;
        write_archive(&entries, &archive_path)
    })
    .await?
}

/// Deflate, fixed 1980-01-01 timestamp, source permission bits, and ZIP64
/// headers for entries too large for 32-bit sizes.
fn entry_options(mode: u32, len: u64) -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(mode)
        .large_file(needs_zip64(len))
}

/// Whether an entry of `len` bytes needs ZIP64 size fields.
fn needs_zip64(len: u64) -> bool {
    len >= u64::from(u32::MAX)
}

#[cfg(unix)]
fn file_mode(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn file_mode(_meta: &std::fs::Metadata) -> u32 {
    0o644
}
