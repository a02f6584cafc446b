//! Location of the AWS CLI profile files

use crate::{Error, ProfileFile, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory name the AWS CLI reads from under the home directory
pub const AWS_DIR_NAME: &str = ".aws";

/// Paths of the `.aws` directory and the files inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsPaths {
    /// The `.aws` directory
    pub dir: PathBuf,
    /// `<dir>/config`
    pub config: PathBuf,
    /// `<dir>/credentials`
    pub credentials: PathBuf,
}

impl AwsPaths {
    /// Layout rooted at `<base>/.aws`
    #[must_use]
    pub fn new(base: impl AsRef<Path>) -> Self {
        let dir = base.as_ref().join(AWS_DIR_NAME);
        Self {
            config: dir.join(ProfileFile::Config.file_name()),
            credentials: dir.join(ProfileFile::Credentials.file_name()),
            dir,
        }
    }

    /// Layout rooted at the current user's home directory
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirectoryUnavailable`] if no home directory is known.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeDirectoryUnavailable)?;
        Ok(Self::new(home))
    }

    /// Path of one of the profile files
    #[must_use]
    pub fn path_for(&self, file: ProfileFile) -> &Path {
        match file {
            ProfileFile::Config => &self.config,
            ProfileFile::Credentials => &self.credentials,
        }
    }

    /// Create the `.aws` directory and any missing parents.
    ///
    /// An existing directory is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be created.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::io("create directory", &self.dir, e))?;
        tracing::debug!(dir = %self.dir.display(), "AWS directory ready");
        Ok(())
    }

    /// Check that neither profile file exists yet.
    ///
    /// Any entry at a target path counts, including a dangling symlink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileAlreadyExists`] for the first occupied path, or
    /// [`Error::Io`] if a path cannot be inspected.
    pub fn check_vacant(&self) -> Result<()> {
        for file in ProfileFile::ALL {
            let path = self.path_for(file);
            match fs::symlink_metadata(path) {
                Ok(_) => {
                    return Err(Error::FileAlreadyExists {
                        path: path.to_path_buf(),
                    });
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(Error::io("inspect", path, e)),
            }
        }
        Ok(())
    }
}
