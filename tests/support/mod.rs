//! Test support utilities for smedit integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod editors;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use editors::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// The binary stages its scratch file in `$HOME`, so every test gets its own
/// home and can check that nothing is left behind. No process-global state
/// is mutated; child processes get `HOME` through `.env()`.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Entries currently in the home directory.
    pub fn home_entries(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.home.path())
            .expect("failed to read temp home")
            .map(|e| e.expect("failed to read dir entry").path())
            .collect()
    }

    /// Assert the home directory holds no leftover scratch file.
    pub fn assert_home_clean(&self) {
        let entries = self.home_entries();
        assert!(
            entries.is_empty(),
            "expected empty home, found: {:?}",
            entries
        );
    }
}
