//! Editor launcher.
//!
//! Runs the user's editor on the scratch file and blocks until it exits.
//! The child inherits stdin, stdout and stderr so terminal editors work.
//! Ctrl-C ends the editor and surfaces as an unsuccessful exit.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::core::interrupt;
use crate::error::{ConfigError, EditorError, Result};

/// Something that edits a file in place.
pub trait Editor {
    /// Edit the file at `path`, returning once editing is finished.
    ///
    /// # Errors
    ///
    /// Returns `EditorError` if the editor cannot run or reports failure.
    fn edit(&self, path: &Path) -> Result<()>;
}

impl<F> Editor for F
where
    F: Fn(&Path) -> Result<()>,
{
    fn edit(&self, path: &Path) -> Result<()> {
        self(path)
    }
}

/// Editor run as a subprocess.
#[derive(Debug, Clone)]
pub struct ProcessEditor {
    program: String,
    args: Vec<String>,
}

impl ProcessEditor {
    /// Parse an editor command such as `vi` or `code --wait`.
    ///
    /// Shell quoting is honoured, so paths with spaces can be quoted.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEditor` if the command is empty or has
    /// unbalanced quotes.
    pub fn from_command(command: &str) -> Result<Self> {
        let invalid = |reason: &str| ConfigError::InvalidEditor {
            command: command.to_string(),
            reason: reason.to_string(),
        };

        let mut words = shell_words::split(command)
            .map_err(|e| invalid(&e.to_string()))?
            .into_iter();
        let program = words.next().ok_or_else(|| invalid("empty command"))?;

        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn resolve_program(&self) -> Result<PathBuf> {
        which::which(&self.program)
            .map_err(|_| EditorError::NotFound(self.program.clone()).into())
    }
}

impl Editor for ProcessEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        let program = self.resolve_program()?;
        debug!(program = %program.display(), args = ?self.args, "launching editor");

        // An interrupt must end the editor, not smedit.
        interrupt::defer_to_child();

        let status = Command::new(&program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|source| EditorError::Launch {
                editor: self.program.clone(),
                source,
            })?;

        debug!(%status, "editor exited");
        if !status.success() {
            return Err(EditorError::Exit {
                editor: self.program.clone(),
                status,
            }
            .into());
        }
        Ok(())
    }
}
