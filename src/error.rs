//! Error types.
//!
//! One enum per failure area, wrapped by [`Error`]. Every variant is fatal:
//! nothing is retried, errors bubble up to `main` which prints and exits.

use std::process::ExitStatus;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Scratch(#[from] ScratchError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Invalid or missing input.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("secretid is required")]
    MissingSecretId,

    #[error("invalid editor command {command:?}: {reason}")]
    InvalidEditor { command: String, reason: String },
}

/// Secret store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to get secret {id}: {reason}")]
    Fetch { id: String, reason: String },

    #[error("secret {0} has no string value (binary secrets are not supported)")]
    NotText(String),

    #[error("failed to update secret {id}: {reason}")]
    Update { id: String, reason: String },
}

/// Scratch file and home directory failures.
#[derive(Error, Debug)]
pub enum ScratchError {
    #[error("failed to resolve home directory of the current user")]
    NoHomeDir,

    #[error("failed to write secret to file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("edited file is not valid UTF-8")]
    NotUtf8,
}

/// Editor subprocess failures.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("editor not found: {0}")]
    NotFound(String),

    #[error("failed to open editor {editor}: {source}")]
    Launch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open editor: {editor} exited with {status}")]
    Exit { editor: String, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, Error>;
