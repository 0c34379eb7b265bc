//! System clipboard access

use thiserror::Error;

/// Clipboard failures
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (e.g. no display server)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the text
    #[error("Clipboard error: {0}")]
    Write(String),
}

/// Destination for the final command
pub trait Clipboard {
    /// Replace the clipboard content with `text`
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError` if the clipboard cannot be opened or written.
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard, via `arboard`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
