//! Archive checksum calculation and manifest writing.
//!
//! The archive is streamed once in 8KB chunks through every configured
//! digest, so memory use is constant regardless of archive size.

use crate::packager::{Result, error::ErrorExt};
use sha2::{Digest, Sha256};
use std::{fmt, path::Path};
use tokio::io::AsyncReadExt;

/// Digest algorithms written to the checksum manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    /// SHA-256 (64 hex characters).
    Sha256,
    /// MD5, kept for legacy verifiers (32 hex characters).
    Md5,
}

impl ChecksumAlgorithm {
    /// Algorithms in manifest order.
    pub const ALL: [ChecksumAlgorithm; 2] = [ChecksumAlgorithm::Sha256, ChecksumAlgorithm::Md5];

    pub fn label(self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha256 => "SHA256",
            ChecksumAlgorithm::Md5 => "MD5",
        }
    }

    /// Length of the lowercase hex digest.
    pub fn hex_len(self) -> usize {
        match self {
            ChecksumAlgorithm::Sha256 => 64,
            ChecksumAlgorithm::Md5 => 32,
        }
    }

    fn hasher(self) -> Hasher {
        match self {
            ChecksumAlgorithm::Sha256 => Hasher::Sha256(Sha256::new()),
            ChecksumAlgorithm::Md5 => Hasher::Md5(md5::Context::new()),
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One digest of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumRecord {
    pub algorithm: ChecksumAlgorithm,
    /// Lowercase hex digest.
    pub hex_digest: String,
    /// Bare file name of the hashed file.
    pub subject: String,
}

enum Hasher {
    Sha256(Sha256),
    Md5(md5::Context),
}

impl Hasher {
    fn update(&mut self, data: &[u8]) {
        match self {
            Hasher::Sha256(h) => h.update(data),
            Hasher::Md5(h) => h.consume(data),
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            Hasher::Sha256(h) => format!("{:x}", h.finalize()),
            Hasher::Md5(h) => format!("{:x}", h.compute()),
        }
    }
}

/// Streams `path` once through every algorithm in `algorithms`.
///
/// Returns one record per algorithm, in the order given.
pub async fn calculate_checksums(
    path: &Path,
    algorithms: &[ChecksumAlgorithm],
) -> Result<Vec<ChecksumRecord>> {
    let subject = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for hashing", path)?;
    let mut hashers: Vec<_> = algorithms.iter().map(|a| (*a, a.hasher())).collect();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        for (_, hasher) in &mut hashers {
            hasher.update(&buffer[..n]);
        }
    }

    Ok(hashers
        .into_iter()
        .map(|(algorithm, hasher)| ChecksumRecord {
            algorithm,
            hex_digest: hasher.finalize_hex(),
            subject: subject.clone(),
        })
        .collect())
}

/// Renders the manifest text.
///
/// ```text
/// TinaKit v1.0.0 Checksums
/// ========================
///
/// File: tinakit-v1.0.0.zip
/// SHA256: <64 hex>
/// MD5:    <32 hex>
/// ```
pub fn render_manifest(title: &str, subject: &str, records: &[ChecksumRecord]) -> String {
    let width = records
        .iter()
        .map(|r| r.algorithm.label().len() + 1)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push_str("\n\n");
    out.push_str(&format!("File: {subject}\n"));
    for record in records {
        let label = format!("{}:", record.algorithm.label());
        out.push_str(&format!("{label:<width$} {}\n", record.hex_digest));
    }
    out
}

/// Hashes `archive_path` and writes the manifest to `manifest_path`.
///
/// Must only be called once the archive writer has been closed.
pub async fn write_checksum_manifest(
    title: &str,
    archive_path: &Path,
    manifest_path: &Path,
) -> Result<Vec<ChecksumRecord>> {
    let records = calculate_checksums(archive_path, &ChecksumAlgorithm::ALL).await?;
    let subject = records
        .first()
        .map(|r| r.subject.clone())
        .unwrap_or_default();

    let text = render_manifest(title, &subject, &records);
    tokio::fs::write(manifest_path, text)
        .await
        .fs_context("writing checksum manifest", manifest_path)?;

    Ok(records)
}
