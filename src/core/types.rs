//! Domain types.

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Reference to a secret in the store.
///
/// The id is an ID or ARN and is never empty. Version selectors are
/// honoured when reading; updates always target the current version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRef {
    id: String,
    version_id: Option<String>,
    version_stage: Option<String>,
}

impl SecretRef {
    /// Build a reference from a secret ID or ARN.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSecretId` if `id` is empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::MissingSecretId.into());
        }
        Ok(Self {
            id,
            version_id: None,
            version_stage: None,
        })
    }

    /// Pin the read to a version id. Empty means unset.
    pub fn with_version_id(mut self, version_id: Option<String>) -> Self {
        self.version_id = non_empty(version_id);
        self
    }

    /// Pin the read to a version stage. Empty means unset.
    pub fn with_version_stage(mut self, version_stage: Option<String>) -> Self {
        self.version_stage = non_empty(version_stage);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    pub fn version_stage(&self) -> Option<&str> {
        self.version_stage.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Result of one edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file changed and the new content was written back.
    Updated,
    /// The file was left byte-identical; nothing was written.
    Unchanged,
}

impl Outcome {
    /// The single line reported to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Updated => constants::MSG_UPDATED,
            Outcome::Unchanged => constants::MSG_UNCHANGED,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
