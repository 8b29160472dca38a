//! Constants used throughout smedit.
//!
//! Centralizes magic strings and configuration values.

/// Editor used when neither `-editor` nor `$EDITOR` is set.
pub const DEFAULT_EDITOR: &str = "vi";

/// Environment variable consulted for the editor command.
pub const EDITOR_ENV: &str = "EDITOR";

/// Environment variable overriding the tracing filter.
pub const LOG_ENV: &str = "SMEDIT_LOG";

/// Scratch file name prefix (`~/.smedit-XXXXXX.json`).
pub const SCRATCH_PREFIX: &str = ".smedit-";

/// Scratch file extension. Secrets are usually JSON, so editors get
/// matching syntax highlighting.
pub const SCRATCH_SUFFIX: &str = ".json";

/// Outcome line printed after a successful update.
pub const MSG_UPDATED: &str = "Secret updated successfully.";

/// Outcome line printed when the file was left untouched.
pub const MSG_UNCHANGED: &str = "No changes made to the secret.";
