//! Command-line interface.

pub mod output;

use std::ffi::OsString;

use clap::Parser;
use tracing::debug;

use crate::core::config::{self, AwsSettings};
use crate::core::editor::ProcessEditor;
use crate::core::store::SecretsManager;
use crate::core::{SecretRef, Session};
use crate::error::Result;

/// Long flags that may also be written with a single dash (`-secretid`).
const SINGLE_DASH_FLAGS: &[&str] = &["secretid", "editor", "versionid", "versionstage"];

/// Edit an AWS Secrets Manager secret in your local editor.
#[derive(Parser, Debug)]
#[command(
    name = "smedit",
    about = "Edit an AWS Secrets Manager secret in your local editor",
    version,
    after_help = "Flags may be written with one or two dashes: -secretid db-creds"
)]
pub struct Cli {
    /// The ID or ARN of the secret to edit
    #[arg(long = "secretid", value_name = "ID")]
    pub secret_id: Option<String>,

    /// The editor to use (defaults to $EDITOR, then vi)
    #[arg(long, value_name = "COMMAND")]
    pub editor: Option<String>,

    /// The version ID of the secret to fetch
    #[arg(long = "versionid", value_name = "ID")]
    pub version_id: Option<String>,

    /// The version stage of the secret to fetch (e.g. AWSPREVIOUS)
    #[arg(long = "versionstage", value_name = "STAGE")]
    pub version_stage: Option<String>,

    /// AWS region (defaults to the provider chain)
    #[arg(long)]
    pub region: Option<String>,

    /// AWS shared config profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-secretid` style flags to `--secretid`.
///
/// Only the known long flags are rewritten; short flags like `-v` and
/// anything after `--` pass through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for arg in args {
        let arg: OsString = arg.into();
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|s| {
            let name = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let flag = name.split_once('=').map_or(name, |(flag, _)| flag);
            SINGLE_DASH_FLAGS
                .contains(&flag)
                .then(|| OsString::from(format!("-{}", s)))
        });
        if arg == "--" {
            passthrough = true;
        }
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

/// Run the edit workflow for the parsed arguments.
///
/// Input is validated before any AWS call is made.
pub fn execute(cli: Cli) -> Result<()> {
    let secret = SecretRef::new(cli.secret_id.unwrap_or_default())?
        .with_version_id(cli.version_id)
        .with_version_stage(cli.version_stage);

    let command = config::resolve_editor(
        cli.editor.as_deref(),
        config::editor_from_env().as_deref(),
    );
    let editor = ProcessEditor::from_command(&command)?;

    let store = SecretsManager::connect(&AwsSettings {
        region: cli.region,
        profile: cli.profile,
    })?;

    debug!(id = secret.id(), editor = %command, "starting edit session");
    let outcome = Session::new(&store, &editor).run(&secret)?;

    output::outcome(outcome.message(), outcome == crate::core::Outcome::Updated);
    Ok(())
}
