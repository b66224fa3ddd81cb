//! Kodegen Bundler Source - reproducible source release packager.
//!
//! This binary stages a project's sources, generates build scripts and
//! documentation, and writes a zip archive plus a checksum manifest.
//! Each fatal error kind exits with its own status code.

use kodegen_bundler_source::cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
