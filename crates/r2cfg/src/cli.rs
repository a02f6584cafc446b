use crate::tracing::LogLevel;
use clap::Parser;
use miette::{Diagnostic, Report};
use r2cfg_core::WriteReport;
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

/// Exit codes for the CLI application
pub const EXIT_OK: i32 = 0;
/// Missing environment or existing target file
pub const EXIT_CLI: i32 = 2;
/// Unexpected I/O failure
pub const EXIT_IO: i32 = 3;

/// CLI-specific error types with proper exit code mapping.
///
/// Both variants forward the core error's message, diagnostic code and help
/// unchanged; the variant only selects the exit code.
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Environment or pre-existing file problem (exit code 2)
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(r2cfg_core::Error),
    /// Other unexpected error (exit code 3)
    #[error(transparent)]
    #[diagnostic(transparent)]
    Other(r2cfg_core::Error),
}

impl CliError {
    /// Short machine-readable category used in JSON output
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Other(_) => "other",
        }
    }
}

/// Convert `r2cfg_core::Error` to the matching `CliError` variant.
///
/// Missing variables, existing files and an unknown home directory are
/// problems with the job environment (exit code 2). I/O failures are
/// unexpected (exit code 3).
impl From<r2cfg_core::Error> for CliError {
    fn from(err: r2cfg_core::Error) -> Self {
        match err {
            r2cfg_core::Error::MissingEnvironmentVariable { .. }
            | r2cfg_core::Error::FileAlreadyExists { .. }
            | r2cfg_core::Error::HomeDirectoryUnavailable => Self::Config(err),
            r2cfg_core::Error::Io { .. } => Self::Other(err),
        }
    }
}

/// Map CLI error to appropriate exit code
#[must_use]
pub const fn exit_code_for(err: &CliError) -> i32 {
    match err {
        CliError::Config(_) => EXIT_CLI,
        CliError::Other(_) => EXIT_IO,
    }
}

/// JSON error envelope for `err`
///
/// # Errors
///
/// Fails only if serialization itself fails.
pub fn error_json(err: &CliError) -> serde_json::Result<String> {
    let envelope = ErrorEnvelope::new(serde_json::json!({
        "kind": err.kind(),
        "code": err.code().map(|code| code.to_string()),
        "message": err.to_string(),
    }));
    serde_json::to_string(&envelope)
}

/// JSON success envelope for `report`
///
/// # Errors
///
/// Fails if a written path is not valid UTF-8.
pub fn report_json(report: &WriteReport) -> serde_json::Result<String> {
    serde_json::to_string(&OkEnvelope::new(report))
}

/// Render error appropriately based on JSON flag
pub fn render_error(err: CliError, json_mode: bool) {
    if json_mode {
        match error_json(&err) {
            Ok(json) => println!("{json}"),
            Err(_) => eprintln!("Error serializing error response"),
        }
    } else {
        let report = Report::new(err);
        eprintln!("{report:?}");
        // Flush before the process exits
        let _ = io::stderr().flush();
    }
}

/// Success response envelope for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct OkEnvelope<T> {
    /// Status indicator - always "ok" for success
    pub status: &'static str,
    /// The actual data payload
    pub data: T,
}

impl<T> OkEnvelope<T> {
    /// Create a new success envelope
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self { status: "ok", data }
    }
}

/// Error response envelope for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope<E> {
    /// Status indicator - always "error" for failures
    pub status: &'static str,
    /// The error details
    pub error: E,
}

impl<E> ErrorEnvelope<E> {
    /// Create a new error envelope
    #[must_use]
    pub const fn new(error: E) -> Self {
        Self {
            status: "error",
            error,
        }
    }
}

/// Write AWS CLI profile files for Cloudflare R2 access.
///
/// Reads `R2_S3_ENDPOINT`, `R2_ACCESS_KEY_ID` and `R2_SECRET_ACCESS_KEY` and
/// writes `~/.aws/config` and `~/.aws/credentials`. Existing files are never
/// overwritten.
#[derive(Parser, Debug)]
#[command(name = "r2cfg")]
#[command(about = "Write AWS CLI profile files for Cloudflare R2 access in CI")]
#[command(version)]
pub struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, default_value = "warn", value_enum)]
    pub level: LogLevel,

    /// Output logs and results in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Parse the process arguments
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
