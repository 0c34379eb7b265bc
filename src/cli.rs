//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for clm using the `clap` crate and
//! the process exit statuses the binary reports.
//!
//! # Commands
//!
//! - **new**: Interactively add a command template
//! - **list**: Pick a command (optionally by tag), fill in its placeholders,
//!   copy it to the clipboard
//! - **delete**: Pick a command and remove it
//!
//! Running `clm` without a command prints the help text and exits
//! successfully.
//!
//! # Examples
//!
//! ```
//! use clm::cli::{Cli, Commands};
//!
//! let cli = Cli::try_parse_from_args(["clm", "list", "docker"]).unwrap();
//! assert!(matches!(cli.command, Some(Commands::List { tag: Some(_) })));
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Process exit statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Completed, including informational outcomes like an empty store
    Success = 0,
    /// Prompt, clipboard or configuration failure
    Failure = 1,
    /// Unknown command or bad arguments
    Usage = 2,
    /// The store file could not be read, decoded or written
    StoreError = 3,
    /// The user aborted an interactive step
    Cancelled = 4,
}

impl ExitStatus {
    /// Numeric exit code
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "clm")]
#[command(about = "Store shell command templates, pick one and copy it to the clipboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Command store file (overrides config and CLM_STORE_PATH)
    #[arg(long = "file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a new command template
    #[command(visible_alias = "add")]
    New,

    /// Select a command, fill in its placeholders and copy it to the clipboard
    #[command(visible_alias = "ls")]
    List {
        /// Only show commands with exactly this tag
        tag: Option<String>,
    },

    /// Select a command and delete it
    #[command(visible_alias = "rm")]
    Delete,
}

impl Cli {
    /// Parse command-line arguments from the process environment
    ///
    /// # Errors
    ///
    /// Returns `clap::Error` for help/version requests and invalid usage;
    /// the caller decides how to report it.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parse an explicit argument list
    ///
    /// # Errors
    ///
    /// Returns `clap::Error` for help/version requests and invalid usage.
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Rendered help text
    #[must_use]
    pub fn help_text() -> String {
        let mut command = Self::command();
        command.render_help().to_string()
    }
}

/// Exit status for a clap parse error
///
/// Help and version output are informational and succeed; everything else
/// is a usage error.
#[must_use]
pub fn parse_error_status(err: &clap::Error) -> ExitStatus {
    if err.use_stderr() {
        ExitStatus::Usage
    } else {
        ExitStatus::Success
    }
}
