//! Fake editors.
//!
//! Closure editors for library tests and shell-script editors for tests
//! that go through a real subprocess.

use std::path::{Path, PathBuf};

use smedit::error::{Result, ScratchError};

/// Editor that overwrites the file with `content`.
pub fn rewrite_with(content: &[u8]) -> impl Fn(&Path) -> Result<()> + '_ {
    move |path: &Path| {
        std::fs::write(path, content).map_err(ScratchError::Write)?;
        Ok(())
    }
}

/// Editor that leaves the file alone.
pub fn no_op(_path: &Path) -> Result<()> {
    Ok(())
}

/// Write an executable shell script editor into `dir`.
///
/// The script receives the scratch file path as `$1`.
#[cfg(unix)]
pub fn script_editor(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("failed to chmod script");
    path
}
