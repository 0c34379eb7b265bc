//! clm - a personal command-snippet manager
//!
//! Shell command templates are stored with a title and a tag in a local
//! JSON file. Picking one interactively fills in its `<placeholder>`
//! variables and copies the result to the clipboard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod store;
pub mod template;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ClmError {
    /// Store error
    #[error("{0}")]
    StoreError(#[from] store::StoreError),
    /// Prompt or picker failure
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// The user aborted an interactive step
    #[error("{0}")]
    Cancelled(String),
}

impl ClmError {
    /// Process exit status for this error
    #[must_use]
    pub const fn exit_status(&self) -> cli::ExitStatus {
        match self {
            Self::StoreError(_) => cli::ExitStatus::StoreError,
            Self::Cancelled(_) => cli::ExitStatus::Cancelled,
            Self::InputError(_) | Self::ConfigError(_) => cli::ExitStatus::Failure,
        }
    }
}

/// One stored command template
///
/// Missing fields in the store file read as empty strings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Entry {
    /// Display label
    pub title: String,
    /// Command template, may contain `<name>` placeholders
    pub command: String,
    /// Category label; empty means untagged
    pub tag: String,
}

impl Entry {
    /// Create a new Entry
    #[must_use]
    pub fn new(title: impl Into<String>, command: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            command: command.into(),
            tag: tag.into(),
        }
    }
}
