//! Shared helpers for packaging stages.

pub mod fs;
