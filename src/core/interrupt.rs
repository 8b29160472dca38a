//! Interrupt handling while a child process owns the terminal.
//!
//! Ctrl-C is delivered to the whole foreground process group. With the
//! default action smedit would die next to the editor and skip removing
//! the scratch file. Once [`defer_to_child`] has run, SIGINT only reaches
//! smedit as a log line: the editor still gets the signal, exits, and the
//! failure comes back through its exit status.
//!
//! The handler is process-wide and stays installed until exit.

use std::sync::OnceLock;

use tracing::{debug, warn};

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install the interrupt handler. Idempotent.
///
/// Returns `false` if the handler could not be installed, e.g. because the
/// embedding program registered its own.
pub fn defer_to_child() -> bool {
    *INSTALLED.get_or_init(|| {
        match ctrlc::set_handler(|| debug!("interrupt received, left to the editor")) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to install interrupt handler");
                false
            }
        }
    })
}
