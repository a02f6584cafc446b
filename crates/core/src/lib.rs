// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

//! AWS CLI profile setup for R2 access in CI
//!
//! Reads the R2 endpoint and access keys from the environment and writes the
//! `[default]` profile into `~/.aws/config` and `~/.aws/credentials`.
//! Existing files are never overwritten.
//!
//! ```ignore
//! use r2cfg_core::{AwsPaths, R2Settings, write_profile_files};
//!
//! let settings = R2Settings::from_env()?;
//! let paths = AwsPaths::from_home()?;
//! let report = write_profile_files(&paths, &settings)?;
//! ```

pub mod env;
mod layout;
mod profile;
mod writer;

pub use env::R2Settings;
pub use layout::AwsPaths;
pub use profile::{ProfileFile, render_config, render_credentials};
pub use writer::{WriteReport, write_profile_files};

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for profile setup
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A required environment variable is unset, empty, or not valid Unicode
    #[error("Missing required environment variable: {name}")]
    #[diagnostic(
        code(r2cfg::env::missing),
        help("Set it to a non-empty value in the CI job environment")
    )]
    MissingEnvironmentVariable {
        /// Name of the variable
        name: &'static str,
    },

    /// A profile file is already present at the target path
    #[error("AWS config file '{}' exists. Refusing to overwrite.", path.display())]
    #[diagnostic(
        code(r2cfg::fs::exists),
        help("Remove the file or run in a clean environment")
    )]
    FileAlreadyExists {
        /// Path of the existing file
        path: PathBuf,
    },

    /// The user's home directory could not be determined
    #[error("Could not determine home directory")]
    #[diagnostic(code(r2cfg::fs::no_home), help("Set HOME for the CI job"))]
    HomeDirectoryUnavailable,

    /// Filesystem operation failed
    #[error("Failed to {operation} '{}': {source}", path.display())]
    #[diagnostic(
        code(r2cfg::fs::io),
        help("Check file permissions and ensure the path exists")
    )]
    Io {
        /// What was being attempted (e.g. "create directory")
        operation: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error for an operation on a path
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for profile setup
pub type Result<T> = std::result::Result<T, Error>;
