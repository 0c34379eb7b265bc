//! Testing utilities for clm
//!
//! Helper types for driving the command handlers without a terminal:
//! an isolated store in a temporary directory, a clipboard that records
//! what it was given and an output writer that captures messages.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::sync::Mutex;

use tempfile::TempDir;

use crate::Entry;
use crate::clipboard::{Clipboard, ClipboardError};
use crate::store::Store;
use crate::ui::OutputWriter;

/// A store in its own temporary directory, removed on drop
pub struct TestStore {
    _dir: TempDir,
    store: Store,
}

impl TestStore {
    /// Create an empty store; the file does not exist yet
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = Store::new(dir.path().join("commands.json"));
        Self { _dir: dir, store }
    }

    /// Create a store already holding `entries`
    ///
    /// # Panics
    /// Panics if the entries cannot be saved.
    #[must_use]
    pub fn with_entries(entries: &[Entry]) -> Self {
        let test_store = Self::new();
        test_store.store.save(entries).expect("Failed to seed store");
        test_store
    }

    /// Get a reference to the underlying store
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Raw bytes of the store file, `None` if it does not exist
    #[must_use]
    pub fn raw(&self) -> Option<Vec<u8>> {
        fs::read(self.store.path()).ok()
    }
}

/// Clipboard double that records the last text, or always fails
#[derive(Debug, Default)]
pub struct MockClipboard {
    content: Mutex<Option<String>>,
    fail: bool,
}

impl MockClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that is never available
    #[must_use]
    pub fn failing() -> Self {
        Self {
            content: Mutex::new(None),
            fail: true,
        }
    }

    /// Last text written, if any
    pub fn content(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }
}

impl Clipboard for MockClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        *self.content.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// Message severity captured by [`BufferWriter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// Output writer that keeps every message in memory
#[derive(Debug, Default)]
pub struct BufferWriter {
    messages: Mutex<Vec<(Level, String)>>,
}

impl BufferWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages in order
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Whether any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|(_, msg)| msg.contains(needle))
    }

    /// Messages written at `level`
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.push(Level::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(Level::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(Level::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_absent() {
        let test_store = TestStore::new();
        assert!(test_store.raw().is_none());
        assert!(test_store.store().load().unwrap().is_empty());
    }

    #[test]
    fn test_store_with_entries() {
        let test_store = TestStore::with_entries(&[Entry::new("a", "b", "c")]);
        assert_eq!(test_store.store().load().unwrap().len(), 1);
    }

    #[test]
    fn test_mock_clipboard_records() {
        let clipboard = MockClipboard::new();
        clipboard.set_text("echo hi").unwrap();
        assert_eq!(clipboard.content().as_deref(), Some("echo hi"));

        assert!(MockClipboard::failing().set_text("x").is_err());
    }

    #[test]
    fn test_buffer_writer_levels() {
        let out = BufferWriter::new();
        out.success("saved");
        out.error("broken");

        assert_eq!(out.at(Level::Success), vec!["saved"]);
        assert!(out.contains("broken"));
        assert_eq!(out.messages().len(), 2);
    }
}
