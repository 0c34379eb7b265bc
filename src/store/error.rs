//! Store-specific error types
//!
//! This module defines all error types that can occur while reading or
//! writing the command store file. Every variant carries the path it was
//! operating on so the message is actionable without extra context.
//!
//! # Error Types
//!
//! - **`Read`**: The store file exists but could not be opened or read
//! - **`Decode`**: The store file is not a JSON array of entries
//! - **`Encode`**: The entries could not be serialized
//! - **`Write`**: The store file (or its parent directory) could not be written

use std::path::PathBuf;
use thiserror::Error;

/// Store-specific errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be read
    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not a valid JSON array of commands
    #[error("Error decoding {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The commands could not be serialized
    #[error("Error encoding commands: {0}")]
    Encode(#[source] serde_json::Error),

    /// The store file could not be created or written
    #[error("Error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
