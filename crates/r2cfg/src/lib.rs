// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

//! r2cfg - AWS CLI profile setup for Cloudflare R2 in CI
//!
//! Reads `R2_S3_ENDPOINT`, `R2_ACCESS_KEY_ID` and `R2_SECRET_ACCESS_KEY` and
//! writes `~/.aws/config` and `~/.aws/credentials`, refusing to overwrite
//! either file. The file logic lives in [`r2cfg_core`]; this crate adds the
//! command-line surface, logging and exit codes.

// CLI output goes to stdout/stderr by design
#![allow(clippy::print_stdout, clippy::print_stderr)]

/// CLI argument parsing, errors and exit codes.
pub mod cli;
/// The setup command.
pub mod setup;
/// Tracing and logging configuration.
pub mod tracing;

pub use cli::{Cli, CliError, exit_code_for};
