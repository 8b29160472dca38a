//! Invocation settings.
//!
//! Everything is resolved from flags and the environment before the
//! workflow starts. There is no config file.

use tracing::debug;

use crate::core::constants;

/// Resolve the editor command.
///
/// Order: explicit flag, then the `EDITOR` value, then [`constants::DEFAULT_EDITOR`].
/// Empty or blank values count as unset.
pub fn resolve_editor(flag: Option<&str>, env: Option<&str>) -> String {
    let pick = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);

    if let Some(editor) = pick(flag) {
        debug!(editor = %editor, source = "flag", "editor resolved");
        return editor;
    }
    if let Some(editor) = pick(env) {
        debug!(editor = %editor, source = constants::EDITOR_ENV, "editor resolved");
        return editor;
    }
    debug!(editor = constants::DEFAULT_EDITOR, source = "default", "editor resolved");
    constants::DEFAULT_EDITOR.to_string()
}

/// Read `EDITOR` from the process environment.
pub fn editor_from_env() -> Option<String> {
    std::env::var(constants::EDITOR_ENV).ok()
}

/// AWS client overrides. `None` defers to the default provider chain.
#[derive(Debug, Clone, Default)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
}
