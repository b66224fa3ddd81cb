//! User-facing progress output.
//!
//! The reporter is purely observational: write failures are swallowed so
//! they can never change the outcome of a release run.

use crate::packager::builder::ReleaseOutcome;
use std::{
    io::{self, Write},
    sync::Mutex,
};

/// Follow-up actions printed after a successful run.
const NEXT_STEPS: &[&str] = &[
    "Test the release package on different platforms",
    "Upload to GitHub Releases",
    "Update documentation links",
    "Announce the release!",
];

/// Ordered progress and summary writer.
pub struct Reporter {
    out: Mutex<Box<dyn Write + Send>>,
    quiet: bool,
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter")
            .field("quiet", &self.quiet)
            .finish_non_exhaustive()
    }
}

impl Reporter {
    /// Reporter writing to standard output.
    pub fn stdout(quiet: bool) -> Self {
        Self::with_writer(Box::new(io::stdout()), quiet)
    }

    /// Reporter that discards progress lines.
    pub fn quiet() -> Self {
        Self::with_writer(Box::new(io::sink()), true)
    }

    pub fn with_writer(out: Box<dyn Write + Send>, quiet: bool) -> Self {
        Self {
            out: Mutex::new(out),
            quiet,
        }
    }

    fn line(&self, message: &str) {
        if self.quiet {
            return;
        }
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{message}");
            let _ = out.flush();
        }
    }

    /// Top-level banner.
    pub fn banner(&self, message: &str) {
        self.line(&format!("🚀 {message}"));
    }

    /// Start of a pipeline stage.
    pub fn section(&self, title: &str) {
        self.line(&format!("📋 {title}"));
    }

    /// Completed step within a stage.
    pub fn item(&self, message: &str) {
        self.line(&format!("   ✓ {message}"));
    }

    /// Allow-listed entry that was skipped.
    pub fn skip(&self, message: &str) {
        self.line(&format!("   - skipped {message}"));
    }

    /// Plain informational line.
    pub fn info(&self, message: &str) {
        self.line(message);
    }

    /// Final summary: locations, archive size, entry count and next steps.
    pub fn summary(&self, outcome: &ReleaseOutcome) {
        self.line("");
        self.line("🎉 Release package created successfully!");
        self.line(&format!(
            "📦 Package location: {}",
            outcome.archive.path.display()
        ));
        self.line(&format!(
            "📁 Source location: {}",
            outcome.paths.staging_dir.display()
        ));
        self.line(&format!(
            "🔐 Checksums: {}",
            outcome.paths.checksums_path.display()
        ));
        self.line(&format!(
            "📊 Package size: {} ({} entries)",
            format_size_mb(outcome.archive.size),
            outcome.archive.entries.len()
        ));
        self.line("");
        self.line("📋 Next steps:");
        for (i, step) in NEXT_STEPS.iter().enumerate() {
            self.line(&format!("{}. {}", i + 1, step));
        }
    }
}

/// Size in mebibytes with two decimals, e.g. `1.50 MB`.
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
