//! Core library components.
//!
//! The edit workflow and the collaborators it drives: the secret store,
//! the scratch file, and the editor subprocess.

pub mod config;
pub mod constants;
pub mod editor;
pub mod interrupt;
pub mod scratch;
pub mod store;
pub mod types;
pub mod workflow;

pub use types::{Outcome, SecretRef};
pub use workflow::Session;
