//! Writing the profile files without clobbering existing ones

use crate::{AwsPaths, Error, ProfileFile, R2Settings, Result};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Files created by [`write_profile_files`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    /// Paths written, in write order
    pub written: Vec<PathBuf>,
}

/// Write `config` and `credentials` for `settings` into `paths`.
///
/// Creates the `.aws` directory if needed, then checks both targets before
/// writing either, so a conflict on one leaves the other untouched. Files
/// created by this call are removed again if a later file fails.
///
/// # Errors
///
/// Returns [`Error::FileAlreadyExists`] if either file is present, or
/// [`Error::Io`] if the directory or a file cannot be written.
pub fn write_profile_files(paths: &AwsPaths, settings: &R2Settings) -> Result<WriteReport> {
    paths.ensure_dir()?;
    paths.check_vacant()?;
    write_files(paths, settings)
}

fn write_files(paths: &AwsPaths, settings: &R2Settings) -> Result<WriteReport> {
    let mut report = WriteReport::default();
    for file in ProfileFile::ALL {
        let path = paths.path_for(file);
        if let Err(err) = write_new(path, file, file.render(settings).as_bytes()) {
            remove_created(&report.written);
            return Err(err);
        }
        tracing::info!(file = %file, path = %path.display(), "Wrote AWS profile file");
        report.written.push(path.to_path_buf());
    }
    Ok(report)
}

fn remove_created(created: &[PathBuf]) {
    for path in created {
        match fs::remove_file(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "Removed partially written profile"),
            Err(e) => tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to remove partially written profile"
            ),
        }
    }
}

fn write_new(path: &Path, file: ProfileFile, contents: &[u8]) -> Result<()> {
    let mut handle = match create_new(path, file) {
        Ok(handle) => handle,
        // Appeared after check_vacant
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(Error::FileAlreadyExists {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(Error::io("create", path, e)),
    };

    let written = handle.write_all(contents).and_then(|()| handle.sync_all());
    if let Err(e) = written {
        drop(handle);
        remove_created(&[path.to_path_buf()]);
        return Err(Error::io("write", path, e));
    }
    Ok(())
}

#[cfg(unix)]
fn create_new(path: &Path, file: ProfileFile) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(file.mode())
        .open(path)
}

#[cfg(not(unix))]
fn create_new(path: &Path, _file: ProfileFile) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}
