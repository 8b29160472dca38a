//! smedit - Edit AWS Secrets Manager secrets in your local editor.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smedit::cli::output;
use smedit::cli::{execute, Cli};
use smedit::core::constants;
use smedit::error::{ConfigError, EditorError, Error};

fn main() {
    let cli = Cli::parse_args();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("smedit=debug")
        } else {
            EnvFilter::new("smedit=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingSecretId) => Some("pass -secretid <id-or-arn>"),
            Error::Config(ConfigError::InvalidEditor { .. })
            | Error::Editor(EditorError::NotFound(_)) => {
                Some("set -editor or $EDITOR to an installed editor")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
