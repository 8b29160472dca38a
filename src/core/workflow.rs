//! Fetch, edit, and conditionally write back one secret.

use tracing::{debug, info};

use crate::core::editor::Editor;
use crate::core::scratch::{fingerprint, ScratchFile, ScratchLocation};
use crate::core::store::SecretStore;
use crate::core::types::{Outcome, SecretRef};
use crate::error::{Result, ScratchError};

/// One edit session over a store and an editor.
pub struct Session<'a, S: ?Sized, E: ?Sized> {
    store: &'a S,
    editor: &'a E,
    location: ScratchLocation,
}

impl<'a, S, E> Session<'a, S, E>
where
    S: SecretStore + ?Sized,
    E: Editor + ?Sized,
{
    /// Session staging its scratch file in the home directory.
    pub fn new(store: &'a S, editor: &'a E) -> Self {
        Self {
            store,
            editor,
            location: ScratchLocation::Home,
        }
    }

    /// Stage the scratch file somewhere else.
    pub fn scratch_in(mut self, location: ScratchLocation) -> Self {
        self.location = location;
        self
    }

    /// Run the workflow for `secret`.
    ///
    /// Every step is fatal on error. The scratch file is removed on every
    /// path out of this function once it has been created.
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that failed.
    pub fn run(&self, secret: &SecretRef) -> Result<Outcome> {
        debug!(store = self.store.name(), id = secret.id(), "fetching secret");
        let content = self.store.fetch(secret)?;

        let dir = self.location.resolve()?;
        let scratch = ScratchFile::create(&dir, content.as_bytes())?;

        let baseline = scratch.read()?;
        debug!(baseline = %fingerprint(&baseline), len = baseline.len(), "baseline captured");

        self.editor.edit(scratch.path())?;

        let edited = scratch.read()?;
        if !has_changed(&baseline, &edited) {
            debug!("content unchanged, skipping update");
            return Ok(Outcome::Unchanged);
        }
        debug!(edited = %fingerprint(&edited), len = edited.len(), "content changed");

        let updated = std::str::from_utf8(&edited).map_err(|_| ScratchError::NotUtf8)?;
        self.store.update(secret.id(), updated)?;
        info!(id = secret.id(), "secret updated");

        Ok(Outcome::Updated)
    }
}

/// Raw byte comparison. Whitespace-only edits count as changes.
pub fn has_changed(baseline: &[u8], current: &[u8]) -> bool {
    baseline != current
}
