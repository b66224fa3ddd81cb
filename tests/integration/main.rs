//! Integration tests for the source release packager.

mod helpers;
mod test_cli;
mod test_pipeline;
