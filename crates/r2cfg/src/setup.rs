//! The setup command: environment in, profile files out

use crate::cli::CliError;
use r2cfg_core::{AwsPaths, R2Settings, WriteReport, write_profile_files};
use tracing::instrument;

/// Resolve settings from the process environment and write the profile
/// files under the user's home directory.
///
/// # Errors
///
/// See [`run`].
#[instrument(name = "r2cfg_setup")]
pub fn execute() -> Result<WriteReport, CliError> {
    let settings = R2Settings::from_env()?;
    let paths = AwsPaths::from_home()?;
    run(&paths, &settings)
}

/// Write the profile files for `settings` into `paths`.
///
/// # Errors
///
/// Returns [`CliError::Config`] if a target file already exists and
/// [`CliError::Other`] for I/O failures.
pub fn run(paths: &AwsPaths, settings: &R2Settings) -> Result<WriteReport, CliError> {
    tracing::debug!(dir = %paths.dir.display(), "Writing AWS profile files");
    let report = write_profile_files(paths, settings)?;
    tracing::info!(files = report.written.len(), "AWS CLI configured for R2");
    Ok(report)
}
