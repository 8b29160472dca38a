//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR and non-terminal streams):
//! - Green: success
//! - Red: errors
//! - Cyan: hints
//! - Dimmed: secondary info

use console::style;

/// Colors for stdout.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// Colors for stderr.
fn colors_enabled_stderr() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Print the outcome line verbatim.
///
/// No prefix is added so scripts can match the exact text.
pub fn outcome(msg: &str, changed: bool) {
    println!("{}", outcome_line(msg, changed, colors_enabled()));
}

fn outcome_line(msg: &str, changed: bool, colors: bool) -> String {
    if !colors {
        msg.to_string()
    } else if changed {
        style(msg).green().force_styling(true).to_string()
    } else {
        style(msg).dim().force_styling(true).to_string()
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ failed to get secret db-creds: ...`
pub fn error(msg: &str) {
    if colors_enabled_stderr() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ pass -secretid <id-or-arn>`
pub fn hint(msg: &str) {
    if colors_enabled_stderr() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}
