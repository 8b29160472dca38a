//! Scratch file holding the secret while it is being edited.
//!
//! The file lives in the user's home directory under a unique name with
//! owner-only permissions, and is removed when the [`ScratchFile`] is
//! dropped, whichever way the workflow exits.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::TempPath;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{Result, ScratchError};

/// Where scratch files are created.
#[derive(Debug, Clone, Default)]
pub enum ScratchLocation {
    /// The current user's home directory.
    #[default]
    Home,
    /// An explicit directory.
    Dir(PathBuf),
}

impl ScratchLocation {
    /// Resolve to a directory path.
    ///
    /// # Errors
    ///
    /// Returns `ScratchError::NoHomeDir` if the home directory is unknown.
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            ScratchLocation::Home => Ok(dirs::home_dir().ok_or(ScratchError::NoHomeDir)?),
            ScratchLocation::Dir(dir) => Ok(dir.clone()),
        }
    }
}

/// Secret content staged on disk.
pub struct ScratchFile {
    path: TempPath,
}

impl ScratchFile {
    /// Create a unique file in `dir` holding `content`.
    ///
    /// On Unix `tempfile` creates the file with mode `0600`.
    ///
    /// # Errors
    ///
    /// Returns `ScratchError::Write` if the file cannot be created or written.
    pub fn create(dir: &Path, content: &[u8]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(constants::SCRATCH_PREFIX)
            .suffix(constants::SCRATCH_SUFFIX)
            .tempfile_in(dir)
            .map_err(ScratchError::Write)?;

        file.write_all(content).map_err(ScratchError::Write)?;
        file.flush().map_err(ScratchError::Write)?;

        // Close our handle so the editor is free to replace the file.
        let path = file.into_temp_path();
        debug!(path = %path.display(), "scratch file created");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the bytes currently on disk.
    ///
    /// # Errors
    ///
    /// Returns `ScratchError::Read` if the file is gone or unreadable.
    pub fn read(&self) -> Result<Zeroizing<Vec<u8>>> {
        let bytes = fs::read(&self.path).map_err(ScratchError::Read)?;
        Ok(Zeroizing::new(bytes))
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        debug!(path = %self.path.display(), "removing scratch file");
    }
}

/// Short SHA-256 fingerprint for logging content without revealing it.
pub fn fingerprint(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .take(6)
        .map(|b| format!("{:02x}", b))
        .collect()
}
