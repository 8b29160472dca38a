//! smedit - Edit AWS Secrets Manager secrets in your local editor.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Flags, argument normalization, entry point
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Editor resolution, AWS overrides
//!     ├── constants     # Defaults and fixed strings
//!     ├── editor        # Editor trait and subprocess launcher
//!     ├── scratch       # Private temp file for the secret
//!     ├── store/        # Secret stores
//!     │   ├── mod       # SecretStore trait
//!     │   ├── aws       # AWS Secrets Manager
//!     │   └── memory    # In-memory store
//!     ├── types         # SecretRef, Outcome
//!     └── workflow      # fetch → stage → edit → diff → update
//! ```
//!
//! # Example
//!
//! ```no_run
//! use smedit::core::editor::ProcessEditor;
//! use smedit::core::store::Memory;
//! use smedit::core::{SecretRef, Session};
//!
//! # fn main() -> smedit::error::Result<()> {
//! let store = Memory::new().with_secret("db-creds", r#"{"user":"a"}"#);
//! let editor = ProcessEditor::from_command("vi")?;
//! let outcome = Session::new(&store, &editor).run(&SecretRef::new("db-creds")?)?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
