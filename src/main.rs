//! clm CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Add a command template (prompts for title, command and tag)
//! clm new
//!
//! # Pick a command, fill in its <placeholders>, copy it to the clipboard
//! clm list
//! clm list docker
//!
//! # Pick a command and delete it
//! clm delete
//!
//! # Use another store file
//! clm --file ~/snippets.json list
//! ```
//!
//! # Exit status
//!
//! `0` success, `1` failure, `2` usage error, `3` store error, `4` cancelled.
//!
//! # Logging
//!
//! Diagnostics go to stderr. The filter is read from `CLM_LOG` (e.g.
//! `CLM_LOG=clm=debug`); `--verbose` lowers the default from `warn` to
//! `debug`.

use std::process::ExitCode;

use clm::{
    ClmError,
    cli::{self, Cli, Commands, ExitStatus},
    clipboard::SystemClipboard,
    commands,
    config::ClmConfig,
    store::Store,
    ui::{DialoguerInput, OutputWriter, QuietWriter, StdoutWriter},
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "CLM_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}

/// Dispatch a parsed command against the store
///
/// # Errors
///
/// Returns whatever `ClmError` the command handler reports.
fn run(command: &Commands, store: &Store, output: &dyn OutputWriter) -> Result<(), ClmError> {
    let input = DialoguerInput::new();
    tracing::debug!(?command, path = %store.path().display(), "dispatching");

    match command {
        Commands::New => commands::new(store, &input, output),
        Commands::List { tag } => {
            commands::list(store, tag.as_deref(), &input, &SystemClipboard, output)
        }
        Commands::Delete => commands::delete(store, &input, output),
    }
}

/// Report an error and map it to an exit status
fn report(err: &ClmError, output: &dyn OutputWriter) -> ExitStatus {
    match err {
        ClmError::Cancelled(message) => output.warning(message),
        other => output.error(&other.to_string()),
    }
    err.exit_status()
}

/// Main entry point for the clm application
///
/// Parses arguments, loads configuration, and dispatches to the command
/// handler. Every outcome maps to an [`ExitStatus`].
fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            let status = cli::parse_error_status(&e);
            e.print().ok();
            return status.into();
        }
    };

    init_logging(cli.verbose);

    let Some(command) = cli.command.as_ref() else {
        println!("{}", Cli::help_text());
        return ExitStatus::Success.into();
    };

    let config = match ClmConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let output = QuietWriter::new(StdoutWriter::new(), cli.quiet);
            return report(&ClmError::from(e), &output).into();
        }
    };

    let output = QuietWriter::new(StdoutWriter::new(), cli.quiet || config.quiet);
    let store = Store::new(config.store_path(cli.file.as_deref()));

    match run(command, &store, &output) {
        Ok(()) => ExitStatus::Success.into(),
        Err(e) => report(&e, &output).into(),
    }
}
