//! Command store backed by a single JSON file
//!
//! The whole collection is read on every invocation and rewritten on every
//! mutation. There is no locking: two processes saving at the same time
//! race and the last writer wins.
//!
//! A missing file is an empty collection. A file that exists but does not
//! hold a JSON array of entries is a [`StoreError::Decode`], so callers can
//! tell "no commands" apart from "corrupt store".

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::Entry;

pub mod error;

pub use error::StoreError;

/// Default file name of the store, resolved against the working directory
pub const DEFAULT_STORE_FILE: &str = "commands.json";

/// Handle to the persisted command collection
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store handle for the given file. Nothing is touched on disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every entry, in insertion order
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the file exists but cannot be read, and
    /// `StoreError::Decode` if its content is not a JSON array of entries.
    pub fn load(&self) -> Result<Vec<Entry>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let entries: Vec<Entry> =
            serde_json::from_str(&content).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded commands");
        Ok(entries)
    }

    /// Overwrite the store with `entries`
    ///
    /// The JSON is written to a uniquely named temporary file in the store's
    /// directory which is then renamed over the store, so readers never
    /// observe a truncated array and concurrent saves never share a temporary
    /// file. Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Encode` if serialization fails and
    /// `StoreError::Write` if the directory, temporary file or rename fails.
    pub fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let mut json = serde_json::to_string_pretty(entries).map_err(StoreError::Encode)?;
        json.push('\n');

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
                parent
            }
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| self.write_error(source))?;
        tmp.write_all(json.as_bytes())
            .map_err(|source| self.write_error(source))?;
        tmp.persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "saved commands");
        Ok(())
    }

    /// Append one entry and persist the collection
    ///
    /// Returns the number of stored entries after the append.
    ///
    /// # Errors
    ///
    /// Propagates any `StoreError` from loading or saving.
    pub fn add(&self, entry: Entry) -> Result<usize, StoreError> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.save(&entries)?;
        Ok(entries.len())
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Entries whose tag equals `tag` exactly (case-sensitive), in stored order
#[must_use]
pub fn filter_by_tag(entries: &[Entry], tag: &str) -> Vec<Entry> {
    entries.iter().filter(|e| e.tag == tag).cloned().collect()
}
